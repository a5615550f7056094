// ============================================================================
// AJUDATODOS - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: funções que renderizam DOM
// - ViewModels: estado de formulário + lógica de UI
// - Services: backend HTTP, PIX, Google, clipboard
// - State: shell (sessão + navegação) e toasts com Rc<RefCell>
// - Models: estruturas compartilhadas com o backend e catálogos estáticos
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod app;

use std::cell::{Cell, RefCell};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

// Instância global da App
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static RENDER_SCHEDULED: Cell<bool> = const { Cell::new(false) };
    static TOASTER_SCHEDULED: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 AJUDATODOS - Rust Puro + MVVM ({})", CONFIG.environment);
    log::debug!("[APP] Backend: {}", CONFIG.backend_url);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo imediato
pub fn rerender_app() {
    APP.with(|app_cell| {
        // Um render já em andamento (evento disparado durante o render) é ignorado
        let Ok(mut app) = app_cell.try_borrow_mut() else {
            log::warn!("⚠️ [RERENDER] App ocupada, re-render ignorado");
            return;
        };
        match app.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Erro re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App não está inicializada"),
        }
    });
}

/// Agenda um re-render no próximo tick; várias chamadas no mesmo tick
/// resultam em um único render
pub fn schedule_render() {
    let already_scheduled = RENDER_SCHEDULED.with(|flag| flag.replace(true));
    if already_scheduled {
        return;
    }
    Timeout::new(0, || {
        RENDER_SCHEDULED.with(|flag| flag.set(false));
        rerender_app();
    })
    .forget();
}

/// Redesenha só os toasts, sem tocar no resto da árvore
pub fn rerender_toaster() {
    APP.with(|app_cell| {
        let Ok(app) = app_cell.try_borrow() else {
            log::warn!("⚠️ [TOAST] App ocupada, toaster não atualizado");
            return;
        };
        if let Some(app) = app.as_ref() {
            if let Err(e) = app.render_toaster() {
                log::error!("❌ [TOAST] Erro atualizando toaster: {:?}", e);
            }
        }
    });
}

/// Como `schedule_render`, mas apenas para a fila de toasts
pub fn schedule_toaster_render() {
    let already_scheduled = TOASTER_SCHEDULED.with(|flag| flag.replace(true));
    if already_scheduled {
        return;
    }
    Timeout::new(0, || {
        TOASTER_SCHEDULED.with(|flag| flag.set(false));
        rerender_toaster();
    })
    .forget();
}

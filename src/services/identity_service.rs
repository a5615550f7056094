// ============================================================================
// IDENTITY SERVICE - Login com Google Identity Services (opcional)
// ============================================================================
// O script do Google é carregado pela página host. Se ele não existir no
// momento da montagem, o botão simplesmente não é renderizado.
// ============================================================================

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use base64::Engine as _;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use crate::error::AppError;
use crate::models::IdentityClaims;

/// base64url com padding opcional (segmentos de JWT vêm sem '=')
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Lê `email` e `name` do payload (segundo segmento) de um token assinado.
/// A assinatura não é verificada.
pub fn decode_credential(token: &str) -> Result<IdentityClaims, AppError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| AppError::Identity("token sem payload".to_string()))?;

    // aceita também o alfabeto padrão, como o atob do navegador
    let normalized = payload.replace('+', "-").replace('/', "_");
    let bytes = TOKEN_ENGINE
        .decode(normalized.as_bytes())
        .map_err(|e| AppError::Identity(format!("base64 inválido: {}", e)))?;

    serde_json::from_slice::<IdentityClaims>(&bytes)
        .map_err(|e| AppError::Identity(format!("payload inválido: {}", e)))
}

/// Handle para `google.accounts.id`, presente apenas quando o script carregou
pub struct GoogleIdentity {
    id_api: JsValue,
}

fn get_defined(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

impl GoogleIdentity {
    /// None quando o script não está disponível (caso normal, não é erro)
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let google = get_defined(&window, "google")?;
        let accounts = get_defined(&google, "accounts")?;
        let id_api = get_defined(&accounts, "id")?;
        Some(Self { id_api })
    }

    fn call(&self, method: &str, args: &Array) -> Result<JsValue, JsValue> {
        let function: Function = Reflect::get(&self.id_api, &JsValue::from_str(method))?.dyn_into()?;
        function.apply(&self.id_api, args)
    }

    /// Inicializa com o client id; `on_credential` recebe o token bruto
    /// (string vazia se a resposta vier sem credential)
    pub fn initialize<F>(&self, client_id: &str, on_credential: F) -> Result<(), JsValue>
    where
        F: Fn(String) + 'static,
    {
        let config = Object::new();
        Reflect::set(&config, &JsValue::from_str("client_id"), &JsValue::from_str(client_id))?;

        let callback = Closure::wrap(Box::new(move |response: JsValue| {
            let credential = get_defined(&response, "credential")
                .and_then(|c| c.as_string())
                .unwrap_or_default();
            on_credential(credential);
        }) as Box<dyn FnMut(JsValue)>);
        Reflect::set(&config, &JsValue::from_str("callback"), callback.as_ref())?;
        // O Google mantém a referência durante toda a vida da página
        callback.forget();

        self.call("initialize", &Array::of1(&config))?;
        Ok(())
    }

    pub fn render_button(&self, container: &Element) -> Result<(), JsValue> {
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("theme"), &JsValue::from_str("outline"))?;
        Reflect::set(&options, &JsValue::from_str("size"), &JsValue::from_str("large"))?;
        Reflect::set(&options, &JsValue::from_str("width"), &JsValue::from_str("100%"))?;
        self.call("renderButton", &Array::of2(container.as_ref(), &options))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(json: &str) -> String {
        let engine = GeneralPurpose::new(&alphabet::URL_SAFE, GeneralPurposeConfig::new().with_encode_padding(false));
        format!("eyJhbGciOiJSUzI1NiJ9.{}.assinatura", engine.encode(json))
    }

    #[test]
    fn decodes_email_and_name() {
        let token = token_with_payload(r#"{"email":"maria@gmail.com","name":"Maria Lúcia","sub":"123"}"#);
        let claims = decode_credential(&token).unwrap();
        assert_eq!(claims.email, "maria@gmail.com");
        assert_eq!(claims.name, "Maria Lúcia");
        assert!(!claims.into_user().is_admin);
    }

    #[test]
    fn accepts_padded_payload() {
        let padded = base64::engine::general_purpose::URL_SAFE.encode(r#"{"email":"a@b.c","name":"A"}"#);
        let token = format!("h.{}.s", padded);
        assert_eq!(decode_credential(&token).unwrap().name, "A");
    }

    #[test]
    fn rejects_tokens_without_payload() {
        assert!(matches!(decode_credential(""), Err(AppError::Identity(_))));
        assert!(matches!(decode_credential("apenas-um-segmento"), Err(AppError::Identity(_))));
        assert!(matches!(decode_credential("a..c"), Err(AppError::Identity(_))));
    }

    #[test]
    fn rejects_payload_missing_fields() {
        let token = token_with_payload(r#"{"email":"x@y.z"}"#);
        assert!(matches!(decode_credential(&token), Err(AppError::Identity(_))));
    }

    #[test]
    fn rejects_garbage_base64() {
        assert!(matches!(decode_credential("a.%%%%.c"), Err(AppError::Identity(_))));
    }
}

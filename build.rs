use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Carregar variáveis de ambiente a partir do .env, se existir
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE (aspas opcionais)
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Variáveis já definidas no ambiente têm prioridade
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=Arquivo .env não encontrado. Usando valores padrão (BACKEND_URL=http://localhost:3000).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BACKEND_URL");
    println!("cargo:rerun-if-env-changed=GOOGLE_CLIENT_ID");
    println!("cargo:rerun-if-env-changed=ENVIRONMENT");
    println!("cargo:rerun-if-env-changed=ENABLE_LOGGING");
    println!("cargo:rerun-if-env-changed=TOAST_DURATION_MS");
}

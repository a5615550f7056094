use serde::{Deserialize, Serialize};

/// Página da navegação principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Register,
    Help,
    Adoption,
    Admin,
    Login,
}

impl Page {
    /// Páginas exibidas como botões no header, na ordem
    pub const NAV: [Page; 3] = [Page::Home, Page::Help, Page::Adoption];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Register => "register",
            Page::Help => "help",
            Page::Adoption => "adoption",
            Page::Admin => "admin",
            Page::Login => "login",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Início",
            Page::Register => "Cadastre-se",
            Page::Help => "Como Ajudar",
            Page::Adoption => "Adoção",
            Page::Admin => "Painel",
            Page::Login => "Entrar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_match_serde_names() {
        for page in [Page::Home, Page::Register, Page::Help, Page::Adoption, Page::Admin, Page::Login] {
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(json, format!("\"{}\"", page.as_str()));
        }
    }

    #[test]
    fn default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }
}

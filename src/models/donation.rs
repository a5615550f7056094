// ============================================================================
// DOAÇÕES - Catálogo estático de planos mensais e formas de ajudar
// ============================================================================

use serde::Serialize;

/// Chave PIX estática usada em todas as doações
pub const PIX_KEY: &str = "chave-pix-ajudatodos@exemplo.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Amigo,
    Protetor,
    Heroi,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonationPlan {
    pub id: PlanId,
    pub name: &'static str,
    /// Valor mensal em reais
    pub price: f64,
    pub highlight: bool,
    pub benefits: &'static [&'static str],
}

pub static PLANS: [DonationPlan; 3] = [
    DonationPlan {
        id: PlanId::Amigo,
        name: "Amigo",
        price: 25.0,
        highlight: false,
        benefits: &[
            "Ajuda com alimentação básica",
            "Certificado de doador",
            "Agradecimentos nas redes sociais",
        ],
    },
    DonationPlan {
        id: PlanId::Protetor,
        name: "Protetor",
        price: 50.0,
        highlight: true,
        benefits: &[
            "Cobre vacinas e vermífugos",
            "Todos os benefícios do plano Amigo",
            "Visita guiada ao abrigo",
            "Foto personalizada de um pet ajudado",
        ],
    },
    DonationPlan {
        id: PlanId::Heroi,
        name: "Herói",
        price: 100.0,
        highlight: false,
        benefits: &[
            "Tratamentos médicos complexos",
            "Todos os benefícios anteriores",
            "Relatório trimestral da utilização das doações",
            "Apadrinhamento de um animal",
            "Participação em eventos especiais",
        ],
    },
];

impl DonationPlan {
    pub fn find(id: PlanId) -> &'static DonationPlan {
        PLANS
            .iter()
            .find(|plan| plan.id == id)
            .unwrap_or(&PLANS[0])
    }

    /// Plano usado pelo botão "Doar Agora"
    pub fn default_plan() -> &'static DonationPlan {
        &PLANS[0]
    }
}

/// Dados de pagamento PIX derivados de um plano (nunca persistidos)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPayload {
    pub pix_key: String,
    /// Valor com duas casas e vírgula decimal ("25,00")
    pub amount: String,
    pub description: String,
    pub copy_paste: String,
}

/// Ação disponível em um card de "Como Você Pode Ajudar?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpAction {
    GoToAdoption,
    Donate,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpWay {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub button: &'static str,
    pub action: HelpAction,
}

pub static HELP_WAYS: [HelpWay; 6] = [
    HelpWay {
        icon: "❤️",
        title: "Adote um Animal",
        description: "Dê um lar amoroso para um cão ou gato que precisa de você. A adoção é a forma mais direta de salvar uma vida.",
        button: "Ver Animais",
        action: HelpAction::GoToAdoption,
    },
    HelpWay {
        icon: "R$",
        title: "Faça uma Doação",
        description: "Contribua financeiramente para alimentação, tratamento médico e manutenção do abrigo.",
        button: "Doar Agora",
        action: HelpAction::Donate,
    },
    HelpWay {
        icon: "👥",
        title: "Seja Voluntário",
        description: "Dedique seu tempo ajudando nos cuidados diários, eventos e campanhas de arrecadação.",
        button: "Voluntariar-se",
        action: HelpAction::Info,
    },
    HelpWay {
        icon: "🏠",
        title: "Lar Temporário",
        description: "Acolha temporariamente um animal enquanto ele aguarda uma adoção definitiva.",
        button: "Saiba Mais",
        action: HelpAction::Info,
    },
    HelpWay {
        icon: "🛍️",
        title: "Doe Suprimentos",
        description: "Ração, remédios, cobertores, brinquedos e outros itens são sempre bem-vindos.",
        button: "Ver Lista",
        action: HelpAction::Info,
    },
    HelpWay {
        icon: "📣",
        title: "Divulgue",
        description: "Compartilhe nas redes sociais para aumentar o alcance e encontrar mais adotantes.",
        button: "Compartilhar",
        action: HelpAction::Info,
    },
];

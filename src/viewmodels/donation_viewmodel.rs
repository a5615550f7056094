// ============================================================================
// DONATION VIEWMODEL - Escolha de plano e diálogo PIX
// ============================================================================

use crate::models::{DonationPlan, PaymentPayload, ToastMessage};
use crate::services::payment_service::quote;

pub const PIX_COPIED_MESSAGE: &str = "Dados do PIX copiados para a área de transferência!";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationViewModel {
    selected_plan: Option<&'static DonationPlan>,
    payment: Option<PaymentPayload>,
    dialog_open: bool,
}

impl DonationViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recalcula o pagamento a cada escolha e abre o diálogo
    pub fn choose_plan(&mut self, plan: &'static DonationPlan) -> &PaymentPayload {
        log::info!("💚 [PIX] Plano escolhido: {}", plan.name);
        self.selected_plan = Some(plan);
        self.dialog_open = true;
        self.payment.insert(quote(plan))
    }

    /// Fecha o diálogo; plano e pagamento continuam guardados
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn payment(&self) -> Option<&PaymentPayload> {
        self.payment.as_ref()
    }

    pub fn dialog_title(&self) -> String {
        match self.selected_plan {
            Some(plan) => format!("Doação - Plano {}", plan.name),
            None => "Doação".to_string(),
        }
    }

    /// Texto a copiar; None quando nenhum plano foi escolhido
    pub fn copy_text(&self) -> Option<String> {
        self.payment.as_ref().map(|p| p.copy_paste.clone())
    }

    pub fn copied_toast() -> ToastMessage {
        ToastMessage::success(PIX_COPIED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlanId, PLANS};

    #[test]
    fn starts_closed_without_payment() {
        let vm = DonationViewModel::new();
        assert!(!vm.is_dialog_open());
        assert!(vm.copy_text().is_none());
        assert_eq!(vm.dialog_title(), "Doação");
    }

    #[test]
    fn choosing_a_plan_opens_dialog_with_quote() {
        let mut vm = DonationViewModel::new();
        let amount = vm.choose_plan(DonationPlan::find(PlanId::Protetor)).amount.clone();
        assert_eq!(amount, "50,00");
        assert!(vm.is_dialog_open());
        assert_eq!(vm.dialog_title(), "Doação - Plano Protetor");
        assert!(vm.copy_text().unwrap().ends_with("| Plano: Protetor"));
    }

    #[test]
    fn choosing_again_recomputes_payment() {
        let mut vm = DonationViewModel::new();
        vm.choose_plan(&PLANS[0]);
        vm.close_dialog();
        assert!(!vm.is_dialog_open());
        assert_eq!(vm.payment().map(|p| p.amount.as_str()), Some("25,00"));

        vm.choose_plan(&PLANS[2]);
        assert_eq!(vm.payment().map(|p| p.amount.as_str()), Some("100,00"));
        assert_eq!(vm.dialog_title(), "Doação - Plano Herói");
    }
}

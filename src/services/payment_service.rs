// ============================================================================
// PAYMENT SERVICE - Geração simulada de dados PIX
// ============================================================================
// Função pura: nenhum backend é chamado.
// ============================================================================

use crate::models::{DonationPlan, PaymentPayload, PIX_KEY};

/// Formata um valor em reais com duas casas e vírgula decimal: 25.0 -> "25,00"
pub fn format_amount(price: f64) -> String {
    format!("{:.2}", price).replace('.', ",")
}

/// Monta os dados de pagamento PIX de um plano
pub fn quote(plan: &DonationPlan) -> PaymentPayload {
    let amount = format_amount(plan.price);
    let copy_paste = format!(
        "Chave PIX: {} | Valor: R$ {} | Plano: {}",
        PIX_KEY, amount, plan.name
    );

    PaymentPayload {
        pix_key: PIX_KEY.to_string(),
        amount,
        description: format!("Doação Plano {}", plan.name),
        copy_paste,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlanId, PLANS};

    #[test]
    fn amount_uses_comma_and_two_decimals() {
        assert_eq!(format_amount(25.0), "25,00");
        assert_eq!(format_amount(100.0), "100,00");
        assert_eq!(format_amount(7.5), "7,50");
        assert_eq!(format_amount(0.0), "0,00");
    }

    #[test]
    fn every_catalog_plan_is_quoted() {
        let expected = [(PlanId::Amigo, "25,00"), (PlanId::Protetor, "50,00"), (PlanId::Heroi, "100,00")];
        for (plan, (id, amount)) in PLANS.iter().zip(expected) {
            assert_eq!(plan.id, id);
            let payload = quote(plan);
            assert_eq!(payload.amount, amount);
            assert_eq!(payload.pix_key, PIX_KEY);
        }
    }

    #[test]
    fn copy_paste_text_layout() {
        let payload = quote(DonationPlan::find(PlanId::Heroi));
        assert_eq!(payload.description, "Doação Plano Herói");
        assert_eq!(
            payload.copy_paste,
            "Chave PIX: chave-pix-ajudatodos@exemplo.com | Valor: R$ 100,00 | Plano: Herói"
        );
    }

    #[test]
    fn quote_is_deterministic() {
        for plan in PLANS.iter() {
            assert_eq!(quote(plan), quote(plan));
        }
    }
}

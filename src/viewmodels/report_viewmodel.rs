// ============================================================================
// REPORT VIEWMODEL - Denúncia de animal abandonado
// ============================================================================
// Não existe endpoint de denúncia: o envio é apenas registrado no log.
// ============================================================================

use crate::error::ValidationError;
use crate::models::ToastMessage;

pub const REPORT_SUCCESS_MESSAGE: &str = "Denúncia enviada! Obrigado por ajudar.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalReport {
    pub location: String,
    pub description: String,
    pub contact: String,
}

impl AnimalReport {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.location.trim().is_empty() {
            return Err(ValidationError::EmptyField("local"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyField("descrição"));
        }
        Ok(())
    }
}

/// Valida e "envia" a denúncia; em sucesso o formulário é limpo
pub fn submit_report(report: &mut AnimalReport) -> Result<ToastMessage, ValidationError> {
    report.validate()?;
    log::info!(
        "🐾 [REPORT] Denúncia em '{}' ({} caracteres)",
        report.location.trim(),
        report.description.trim().chars().count()
    );
    *report = AnimalReport::default();
    Ok(ToastMessage::success(REPORT_SUCCESS_MESSAGE))
}

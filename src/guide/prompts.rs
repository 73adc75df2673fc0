//! Fixed assistant copy and reserved option values.

use super::types::{GuideMode, GuideOption, ViewMode};

/// Step at which non-collaborator modes offer the final confirmation.
pub const CONFIRM_STEP: u32 = 6;

pub const VALUE_CREATE: &str = "create";
pub const VALUE_RESTART: &str = "restart";
pub const VALUE_RETRY: &str = "retry";
pub const VALUE_SWITCH_GUIDE: &str = "switch_guide";
pub const VALUE_SWITCH_EXPERT: &str = "switch_expert";
pub const VALUE_CLOSE_WIZARD: &str = "close_wizard";

pub const SAFE_REPLY: &str = "Sigamos adelante, te propongo una opción segura 👇";
pub const CONNECTION_FALLBACK: &str =
    "Lo siento, tuve un problema de conexión. ¿Podemos intentar de nuevo?";
pub const CAMPAIGN_CREATED: &str = "✅ Campaña creada. Ahora generemos contenido.";
pub const CAMPAIGN_FAILED: &str = "❌ Hubo un error al guardar la campaña. Inténtalo de nuevo.";

pub fn retry_option() -> GuideOption {
    GuideOption::new("Reintentar", VALUE_RETRY)
}

pub fn initial_prompt(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Conversation(GuideMode::Collaborator) => {
            "Soy ARA Post Manager, tu copiloto para convertir ideas desordenadas en campañas \
             claras y accionables. Vamos al grano. ¿Qué objetivo tienes con tu campaña?"
        }
        ViewMode::Conversation(GuideMode::Expert) => "¿Objetivo de la campaña?",
        ViewMode::Conversation(GuideMode::IdentityCreation) => {
            "Hola, vamos a configurar una nueva Identidad Funcional. ¿Qué nombre le ponemos?"
        }
        ViewMode::Conversation(GuideMode::Guided) | ViewMode::ManualForm => {
            "Cuéntame qué quieres lograr con tu contenido.\n\
             No pienses en redes todavía, piensa en el objetivo."
        }
    }
}

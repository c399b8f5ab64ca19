//! Board notices and confirmation prompts
//!
//! Fluent (FTL) based; the club UI speaks Spanish, English is the secondary locale.

use fluent::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use std::collections::HashMap;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

use crate::error::{LineupError, ValidationError};
use crate::lineup::{Decision, DestructiveAction, DropOutcome};

pub const DEFAULT_LOCALE: &str = "es-CO";
pub const SUPPORTED_LOCALES: &[&str] = &["es-CO", "en-US"];

const ES_CO: &str = r#"
missing-goalkeeper = ¡Falta el arquero!
incomplete-lineup = Faltan { $missing } jugadores por asignar
player-removed = Jugador retirado de la cancha
player-benched = Jugador enviado al banco
lineup-reset = Alineación reseteada
confirm-reset = ¿Estás seguro de resetear la alineación? Todos los jugadores serán removidos.
confirm-switch = Cambiar la alineación reseteará las posiciones. ¿Continuar?
callup-saved = Convocatoria { $category } guardada
callup-save-failed = Error al guardar convocatoria
roster-load-failed = Error al cargar jugadores
unknown-formation = Formación desconocida: { $formation }
board-summary = { $occupied }/{ $total } asignados
"#;

const EN_US: &str = r#"
missing-goalkeeper = The goalkeeper is missing!
incomplete-lineup = { $missing ->
    [one] 1 player still to assign
   *[other] { $missing } players still to assign
}
player-removed = Player removed from the pitch
player-benched = Player sent to the bench
lineup-reset = Lineup reset
confirm-reset = Reset the lineup? Every player will be removed.
confirm-switch = Changing the formation clears all positions. Continue?
callup-saved = Call-up { $category } saved
callup-save-failed = Could not save the call-up
roster-load-failed = Could not load players
unknown-formation = Unknown formation: { $formation }
board-summary = { $occupied }/{ $total } assigned
"#;

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Failed to parse FTL for {0}")]
    Parse(String),

    #[error("Locale {0} not loaded")]
    NotLoaded(String),
}

/// Localised text for the call-up board.
pub struct BoardLocalizer {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    current_locale: String,
}

impl Default for BoardLocalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardLocalizer {
    /// Localizer with the built-in `es-CO` and `en-US` messages.
    pub fn new() -> Self {
        let mut localizer = Self { bundles: HashMap::new(), current_locale: DEFAULT_LOCALE.to_string() };
        for (locale, ftl) in [("es-CO", ES_CO), ("en-US", EN_US)] {
            // Built-in resources are fixed at compile time.
            if let Err(err) = localizer.load_locale(locale, ftl) {
                tracing::error!("Built-in locale {} failed to load: {}", locale, err);
            }
        }
        localizer
    }

    pub fn load_locale(&mut self, locale: &str, ftl_content: &str) -> Result<(), LocaleError> {
        let resource = FluentResource::try_new(ftl_content.to_string())
            .map_err(|_| LocaleError::Parse(locale.to_string()))?;

        let lang_id: LanguageIdentifier =
            locale.parse().map_err(|_| LocaleError::InvalidLocale(locale.to_string()))?;

        let mut bundle = FluentBundle::new(vec![lang_id]);
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|_| LocaleError::Parse(locale.to_string()))?;

        self.bundles.insert(locale.to_string(), bundle);
        Ok(())
    }

    pub fn locale(&self) -> &str {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: &str) -> Result<(), LocaleError> {
        if !self.bundles.contains_key(locale) {
            return Err(LocaleError::NotLoaded(locale.to_string()));
        }
        self.current_locale = locale.to_string();
        Ok(())
    }

    /// Pick the best loaded locale for the requested list and switch to it.
    pub fn negotiate_locale(&mut self, requested: &[&str]) -> String {
        let available: Vec<LanguageIdentifier> = self.bundles.keys().filter_map(|k| k.parse().ok()).collect();
        let requested: Vec<LanguageIdentifier> = requested.iter().filter_map(|l| l.parse().ok()).collect();
        let default: Option<LanguageIdentifier> = DEFAULT_LOCALE.parse().ok();

        let negotiated = negotiate_languages(&requested, &available, default.as_ref(), NegotiationStrategy::Filtering);

        let chosen = negotiated.first().map(|l| l.to_string()).unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        self.current_locale = chosen.clone();
        chosen
    }

    pub fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        for locale in [self.current_locale.as_str(), DEFAULT_LOCALE] {
            let Some(bundle) = self.bundles.get(locale) else { continue };
            let Some(pattern) = bundle.get_message(key).and_then(|m| m.value()) else { continue };

            let mut errors = vec![];
            return bundle.format_pattern(pattern, args, &mut errors).to_string();
        }

        format!("[{}]", key)
    }

    fn format_with(&self, key: &str, pairs: &[(&str, FluentValue)]) -> String {
        let mut args = FluentArgs::new();
        for (name, value) in pairs {
            args.set(name.to_string(), value.clone());
        }
        self.format(key, Some(&args))
    }

    /// User-facing text for an error surfaced by the board.
    pub fn error_notice(&self, error: &LineupError) -> String {
        match error {
            LineupError::Validation(ValidationError::MissingGoalkeeper { .. }) => self.format("missing-goalkeeper", None),
            LineupError::Validation(ValidationError::IncompleteLineup { missing }) => {
                self.format_with("incomplete-lineup", &[("missing", FluentValue::from(*missing as i64))])
            }
            LineupError::UnknownFormation(id) => {
                self.format_with("unknown-formation", &[("formation", FluentValue::from(id.as_str()))])
            }
            LineupError::Roster(_) => self.format("roster-load-failed", None),
            LineupError::Persistence(_) | LineupError::Serialization(_) => self.format("callup-save-failed", None),
        }
    }

    /// Toast shown after a drop, if any.
    pub fn drop_notice(&self, outcome: &DropOutcome) -> Option<String> {
        match outcome {
            DropOutcome::Removed { .. } => Some(self.format("player-removed", None)),
            DropOutcome::Benched { .. } => Some(self.format("player-benched", None)),
            _ => None,
        }
    }

    pub fn confirm_prompt(&self, action: &DestructiveAction) -> String {
        match action {
            DestructiveAction::Reset { .. } => self.format("confirm-reset", None),
            DestructiveAction::SwitchFormation { .. } => self.format("confirm-switch", None),
        }
    }

    /// Toast after a confirmed reset. Declined or no-op decisions show nothing.
    pub fn decision_notice(&self, action: &DestructiveAction, decision: Decision) -> Option<String> {
        match (action, decision) {
            (DestructiveAction::Reset { .. }, Decision::Applied) => Some(self.format("lineup-reset", None)),
            _ => None,
        }
    }

    pub fn saved_notice(&self, category: &str) -> String {
        self.format_with("callup-saved", &[("category", FluentValue::from(category))])
    }

    pub fn summary_line(&self, occupied: usize, total: usize) -> String {
        self.format_with(
            "board-summary",
            &[("occupied", FluentValue::from(occupied as i64)), ("total", FluentValue::from(total as i64))],
        )
    }
}

//! # Workshop Commands
//!
//! Workshop portal listing and registration.
//!
//! Registration records are `{id, title, date}` copied from the catalog
//! workshop at the time of registering, stored under
//! `<data_dir>/workshopRegistrations.json`.

use serde::Serialize;
use tracing::debug;

use craftsense_core::{Workshop, WorkshopCategory, WorkshopRegistration};

use crate::commands::Render;
use crate::error::AppResult;
use crate::state::{AppConfig, AppState};

/// A catalog workshop plus whether the user is signed up.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopListing {
    #[serde(flatten)]
    pub workshop: Workshop,
    pub registered: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkshopList {
    pub workshops: Vec<WorkshopListing>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationList {
    pub registrations: Vec<WorkshopRegistration>,
}

/// Result of register/unregister.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationUpdate {
    pub message: String,
    pub changed: bool,
    pub registrations: Vec<WorkshopRegistration>,
}

/// Lists catalog workshops, optionally filtered by category.
pub fn list(state: &AppState, category: Option<WorkshopCategory>) -> AppResult<WorkshopList> {
    debug!(?category, "workshops list command");

    let store = state.workshop_store();
    let workshops = state
        .catalog
        .workshops_in(category)
        .into_iter()
        .map(|w| WorkshopListing {
            registered: store.is_registered(&w.id),
            workshop: w.clone(),
        })
        .collect();

    Ok(WorkshopList { workshops })
}

/// The user's registrations in sign-up order.
pub fn mine(state: &AppState) -> AppResult<RegistrationList> {
    debug!("workshops mine command");
    Ok(RegistrationList {
        registrations: state.workshop_store().registrations().to_vec(),
    })
}

/// Registers for a catalog workshop. Registering twice is a no-op.
pub fn register(state: &AppState, workshop_id: &str) -> AppResult<RegistrationUpdate> {
    debug!(workshop_id, "workshops register command");

    let workshop = state.catalog.workshop(workshop_id)?;
    let mut store = state.workshop_store();
    let changed = store.register(WorkshopRegistration::from_workshop(workshop))?;

    let message = if changed {
        format!("Registered for {}", workshop.title)
    } else {
        format!("Already registered for {}", workshop.title)
    };

    Ok(RegistrationUpdate {
        message,
        changed,
        registrations: store.registrations().to_vec(),
    })
}

/// Cancels a registration. Unknown ids are reported, not an error.
pub fn unregister(state: &AppState, workshop_id: &str) -> AppResult<RegistrationUpdate> {
    debug!(workshop_id, "workshops unregister command");

    let mut store = state.workshop_store();
    let changed = store.unregister(workshop_id);

    let message = if changed {
        format!("Unregistered from workshop {}", workshop_id)
    } else {
        format!("Not registered for workshop {}", workshop_id)
    };

    Ok(RegistrationUpdate {
        message,
        changed,
        registrations: store.registrations().to_vec(),
    })
}

fn day(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}

impl Render for WorkshopList {
    fn render(&self, config: &AppConfig) -> String {
        if self.workshops.is_empty() {
            return "No workshops in this category".to_string();
        }

        let mut blocks = Vec::with_capacity(self.workshops.len());
        for listing in &self.workshops {
            let w = &listing.workshop;
            let price = if w.is_paid {
                config.format_currency(w.seat_price())
            } else {
                "Free".to_string()
            };

            let mut block = format!(
                "[{}] {}{}\n    {} | {} | {} | {}, {}\n    {}",
                w.id,
                w.title,
                if listing.registered { "  (registered)" } else { "" },
                w.instructor,
                w.category,
                price,
                day(&w.date),
                w.duration,
                w.summary,
            );

            if listing.registered {
                if let Some(ref link) = w.live_session_link {
                    block.push_str(&format!("\n    Live session: {}", link));
                }
                if let Some(ref url) = w.recording_url {
                    block.push_str(&format!("\n    Recording:    {}", url));
                }
                if let Some(ref url) = w.certificate_url {
                    block.push_str(&format!("\n    Certificate:  {}", url));
                }
            }
            blocks.push(block);
        }
        blocks.join("\n\n")
    }
}

impl Render for RegistrationList {
    fn render(&self, _config: &AppConfig) -> String {
        if self.registrations.is_empty() {
            return "You are not registered for any workshops".to_string();
        }

        self.registrations
            .iter()
            .map(|r| format!("[{}] {}  ({})", r.id, r.title, day(&r.date)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Render for RegistrationUpdate {
    fn render(&self, config: &AppConfig) -> String {
        let list = RegistrationList {
            registrations: self.registrations.clone(),
        };
        format!("{}\n\n{}", self.message, list.render(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::load_catalog;
    use craftsense_storage::MemoryStore;

    fn state() -> AppState {
        let config = AppConfig::default();
        let catalog = load_catalog(&config).unwrap();
        AppState::with_storage(config, catalog, MemoryStore::new())
    }

    #[test]
    fn test_register_twice_keeps_one() {
        let state = state();

        let first = register(&state, "1").unwrap();
        assert!(first.changed);
        assert_eq!(first.registrations.len(), 1);
        assert_eq!(first.registrations[0].title, "Traditional Block Printing Techniques");
        assert_eq!(first.registrations[0].date, "2024-03-25T10:00:00Z");

        let second = register(&state, "1").unwrap();
        assert!(!second.changed);
        assert_eq!(mine(&state).unwrap().registrations.len(), 1);
    }

    #[test]
    fn test_register_unknown_workshop() {
        let err = register(&state(), "42").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_unregister_twice() {
        let state = state();
        register(&state, "2").unwrap();

        assert!(unregister(&state, "2").unwrap().changed);
        let again = unregister(&state, "2").unwrap();
        assert!(!again.changed);
        assert!(again.registrations.is_empty());
    }

    #[test]
    fn test_list_marks_registered_and_filters() {
        let state = state();
        register(&state, "3").unwrap();

        let all = list(&state, None).unwrap();
        assert_eq!(all.workshops.len(), 4);
        let flags: Vec<bool> = all.workshops.iter().map(|l| l.registered).collect();
        assert_eq!(flags, vec![false, false, true, false]);

        let digital = list(&state, Some(WorkshopCategory::DigitalSkills)).unwrap();
        assert_eq!(digital.workshops.len(), 1);
        assert_eq!(digital.workshops[0].workshop.id, "2");
    }

    #[test]
    fn test_render_shows_links_only_when_registered() {
        let state = state();
        let text = list(&state, Some(WorkshopCategory::Craft)).unwrap().render(&state.config);
        assert!(text.contains("₹1500"));
        assert!(!text.contains("Live session"));

        register(&state, "1").unwrap();
        let text = list(&state, Some(WorkshopCategory::Craft)).unwrap().render(&state.config);
        assert!(text.contains("(registered)"));
        assert!(text.contains("Live session: https://meet.google.com/abc-defg-hij"));

        let free = list(&state, Some(WorkshopCategory::DigitalSkills))
            .unwrap()
            .render(&state.config);
        assert!(free.contains("Free"));
    }
}

//! Built-in conversational scenario catalog.
//!
//! Each scenario is a short Spanish dialogue with per-utterance speaker
//! voice and speaking rate. The table is immutable and defined at
//! process start; lookups never mutate it.

use crate::error::{AudioError, AudioResult};
use crate::voice::VoiceCategory;

/// One line of dialogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// The spoken text.
    pub text: &'static str,
    /// Speaker voice category.
    pub voice: VoiceCategory,
    /// Speaking rate multiplier (> 0, 1.0 = normal).
    pub rate: f64,
}

/// A named conversational situation.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Stable identifier, used as the asset file stem.
    pub id: &'static str,
    /// Ordered dialogue script.
    pub utterances: Vec<Utterance>,
}

fn utterance(text: &'static str, voice: VoiceCategory, rate: f64) -> Utterance {
    Utterance { text, voice, rate }
}

/// Read-only catalog of the built-in scenarios.
#[derive(Debug)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// Builds the catalog of built-in scenarios.
    pub fn builtin() -> Self {
        use VoiceCategory::{Child, Female, Male};

        let scenarios = vec![
            Scenario {
                id: "familia_conversacion",
                utterances: vec![
                    utterance("¡Hola mamá! ¿Cómo estás?", Female, 0.9),
                    utterance("Muy bien, hijo. ¿Ya comiste?", Female, 0.9),
                    utterance("Sí, comí con papá en el restaurante", Male, 0.9),
                    utterance("¿Y qué tal estuvo la comida?", Female, 0.9),
                    utterance("Deliciosa, mamá. Te extrañamos", Male, 0.9),
                    utterance("Yo también los extraño mucho", Female, 0.9),
                ],
            },
            Scenario {
                id: "nieto_llamada",
                utterances: vec![
                    utterance("¡Abuelita! ¡Abuelita!", Child, 1.1),
                    utterance("¡Hola mi amor! ¿Cómo estás?", Female, 0.9),
                    utterance("Muy bien, abuelita. Te quiero mucho", Child, 1.1),
                    utterance("Yo también te quiero, mi vida", Female, 0.9),
                    utterance("¿Cuándo vienes a visitarme?", Child, 1.1),
                    utterance("Pronto, mi amor, muy pronto", Female, 0.9),
                ],
            },
            Scenario {
                id: "te_amo",
                utterances: vec![
                    utterance("Te amo con todo mi corazón", Female, 0.8),
                    utterance("Eres lo más hermoso de mi vida", Female, 0.8),
                    utterance("Gracias por existir, mi amor", Female, 0.8),
                    utterance("Siempre estaré a tu lado", Female, 0.8),
                ],
            },
            Scenario {
                id: "telefono_llamada",
                utterances: vec![
                    utterance("Hola, ¿está disponible el doctor?", Male, 0.9),
                    utterance("Un momento, lo conecto", Female, 0.9),
                    utterance("Doctor, tiene una llamada", Female, 0.9),
                    utterance("Gracias, lo atiendo", Male, 0.9),
                    utterance("Hola doctor, necesito una cita", Male, 0.9),
                    utterance("Por supuesto, ¿qué día le conviene?", Male, 0.9),
                ],
            },
            Scenario {
                id: "television_programa",
                utterances: vec![
                    utterance("Bienvenidos al noticiero de las ocho", Male, 0.9),
                    utterance("Hoy tenemos noticias importantes", Female, 0.9),
                    utterance("El clima estará soleado mañana", Male, 0.9),
                    utterance("Y ahora el reporte deportivo", Female, 0.9),
                    utterance("El equipo local ganó el partido", Male, 0.9),
                    utterance("Excelente noticia para los aficionados", Female, 0.9),
                ],
            },
            Scenario {
                id: "restaurante_ruido",
                utterances: vec![
                    utterance("¿Puedes pasarme la sal?", Female, 0.9),
                    utterance("Claro, aquí tienes", Male, 0.9),
                    utterance("Gracias. ¿Qué tal está tu plato?", Female, 0.9),
                ],
            },
            Scenario {
                id: "calle_trafico",
                utterances: vec![
                    utterance("¡Cuidado! El semáforo está en rojo", Male, 1.0),
                    utterance("Esperemos a que cambie", Female, 0.9),
                ],
            },
        ];

        Self { scenarios }
    }

    /// Looks up a scenario by id.
    pub fn lookup(&self, scenario_id: &str) -> AudioResult<&Scenario> {
        self.scenarios
            .iter()
            .find(|s| s.id == scenario_id)
            .ok_or_else(|| AudioError::UnknownScenario {
                id: scenario_id.to_string(),
            })
    }

    /// Iterates scenario ids in catalog order. Restartable.
    pub fn scenario_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.scenarios.iter().map(|s| s.id)
    }

    /// Number of scenarios in the catalog.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// True if the catalog holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_known_scenario() {
        let catalog = ScenarioCatalog::builtin();
        let scenario = catalog.lookup("telefono_llamada").unwrap();
        assert!(!scenario.utterances.is_empty());
        assert_eq!(scenario.id, "telefono_llamada");
    }

    #[test]
    fn test_lookup_unknown_scenario_fails() {
        let catalog = ScenarioCatalog::builtin();
        let err = catalog.lookup("no_existe").unwrap_err();
        assert!(matches!(err, AudioError::UnknownScenario { .. }));
    }

    #[test]
    fn test_scenario_ids_is_restartable() {
        let catalog = ScenarioCatalog::builtin();
        let first: Vec<_> = catalog.scenario_ids().collect();
        let second: Vec<_> = catalog.scenario_ids().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), catalog.len());
    }

    #[test]
    fn test_all_rates_are_positive() {
        let catalog = ScenarioCatalog::builtin();
        for id in catalog.scenario_ids() {
            for utt in &catalog.lookup(id).unwrap().utterances {
                assert!(utt.rate > 0.0, "{}: rate must be positive", id);
                assert!(!utt.text.is_empty());
            }
        }
    }

    #[test]
    fn test_family_scenario_mixes_voices() {
        let catalog = ScenarioCatalog::builtin();
        let scenario = catalog.lookup("familia_conversacion").unwrap();
        let voices: std::collections::HashSet<_> =
            scenario.utterances.iter().map(|u| u.voice).collect();
        assert!(voices.len() >= 2);
    }
}

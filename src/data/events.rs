use crate::company::{Company, CompanyField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An operation on a single field, written in data as
/// `{"op": "add" | "set" | "scale", "value": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "lowercase")]
pub enum EffectOp {
    Add(f64),
    Set(f64),
    Scale(f64),
}

/// How a random event changes one field. A bare number is an additive delta.
///
/// Any other value deserializes as `Ignored` and leaves the field alone, so a
/// single malformed effect never stops the event table from loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Effect {
    Delta(f64),
    Op(EffectOp),
    Ignored(serde_json::Value),
}

impl Effect {
    /// New field value, or `None` for an ignored effect.
    pub fn apply(&self, current: f64) -> Option<f64> {
        match self {
            Effect::Delta(delta) | Effect::Op(EffectOp::Add(delta)) => Some(current + delta),
            Effect::Op(EffectOp::Set(value)) => Some(*value),
            Effect::Op(EffectOp::Scale(factor)) => Some(current * factor),
            Effect::Ignored(_) => None,
        }
    }
}

/// A probabilistic perturbation from `events.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomEvent {
    pub message: String,
    /// Company field key to effect. Keys that do not name a numeric
    /// company field are ignored.
    #[serde(default)]
    pub effect: BTreeMap<String, Effect>,
}

impl RandomEvent {
    /// Applies every resolvable effect to `company`.
    /// Returns the number of fields changed.
    pub fn apply_to(&self, company: &mut Company) -> usize {
        let mut applied = 0;
        for (key, effect) in &self.effect {
            let Some(field) = CompanyField::from_key(key) else {
                continue;
            };
            if let Some(next) = effect.apply(field.get(company)) {
                field.set(company, next);
                applied += 1;
            }
        }
        applied
    }
}

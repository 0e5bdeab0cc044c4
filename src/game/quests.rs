//! Quest definitions and per-session progress tracking

use crate::core::types::{ItemId, QuestId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Stable objective ids used by the standard quests
pub const OBJECTIVE_CLEAR_FOREST: &str = "clear_forest";
pub const OBJECTIVE_CLEAR_MINES: &str = "clear_mines";
pub const OBJECTIVE_FIND_AMULET: &str = "find_amulet";
pub const OBJECTIVE_DELIVER_AMULET: &str = "deliver_amulet";

/// A quest template: objectives to complete and the reward for finishing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub name: String,
    pub description: String,
    pub objectives: Vec<String>,
    pub reward: ItemId,
}

/// Immutable quest catalog
#[derive(Debug, Clone, Default)]
pub struct QuestCatalog {
    quests: HashMap<QuestId, Quest>,
}

impl QuestCatalog {
    pub fn get(&self, id: &QuestId) -> Option<&Quest> {
        self.quests.get(id)
    }

    pub fn quest_ids(&self) -> impl Iterator<Item = &QuestId> {
        self.quests.keys()
    }

    pub fn standard() -> Self {
        let mut quests = HashMap::new();

        quests.insert(
            QuestId::from("village_troubles"),
            Quest {
                name: "Village Troubles".to_string(),
                description: "Investigate the forest and abandoned mines to discover what's causing problems for the village.".to_string(),
                objectives: vec![
                    OBJECTIVE_CLEAR_FOREST.to_string(),
                    OBJECTIVE_CLEAR_MINES.to_string(),
                ],
                reward: ItemId::from("greater_health_potion"),
            },
        );
        quests.insert(
            QuestId::from("royal_amulet"),
            Quest {
                name: "The Royal Amulet".to_string(),
                description: "Find the ancient amulet and bring it to the castle to help stop the darkness.".to_string(),
                objectives: vec![
                    OBJECTIVE_FIND_AMULET.to_string(),
                    OBJECTIVE_DELIVER_AMULET.to_string(),
                ],
                reward: ItemId::from("enchanted_blade"),
            },
        );

        Self { quests }
    }
}

/// Per-session progress for one quest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestState {
    pub completed_objectives: HashSet<String>,
    pub completed: bool,
}

/// Per-session progress across all quests
#[derive(Debug, Clone, Default)]
pub struct QuestLog {
    states: HashMap<QuestId, QuestState>,
}

/// Outcome of recording an objective
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestUpdate {
    /// Objective already done or not part of this quest
    NoChange,
    /// Objective newly completed, quest still in progress
    ObjectiveCompleted,
    /// Objective newly completed and it was the last one; carries the reward
    QuestCompleted(ItemId),
}

impl QuestLog {
    pub fn state(&self, id: &QuestId) -> Option<&QuestState> {
        self.states.get(id)
    }

    pub fn is_completed(&self, id: &QuestId) -> bool {
        self.states.get(id).map(|s| s.completed).unwrap_or(false)
    }

    /// Record an objective against a quest, returning what changed
    pub fn record_objective(
        &mut self,
        catalog: &QuestCatalog,
        quest_id: &QuestId,
        objective: &str,
    ) -> QuestUpdate {
        let Some(quest) = catalog.get(quest_id) else {
            return QuestUpdate::NoChange;
        };
        if !quest.objectives.iter().any(|o| o == objective) {
            return QuestUpdate::NoChange;
        }

        let state = self.states.entry(quest_id.clone()).or_default();
        if state.completed || !state.completed_objectives.insert(objective.to_string()) {
            return QuestUpdate::NoChange;
        }

        let all_done = quest
            .objectives
            .iter()
            .all(|o| state.completed_objectives.contains(o));
        if all_done {
            state.completed = true;
            QuestUpdate::QuestCompleted(quest.reward.clone())
        } else {
            QuestUpdate::ObjectiveCompleted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_then_completion() {
        let catalog = QuestCatalog::standard();
        let mut log = QuestLog::default();
        let quest = QuestId::from("village_troubles");

        assert_eq!(
            log.record_objective(&catalog, &quest, OBJECTIVE_CLEAR_FOREST),
            QuestUpdate::ObjectiveCompleted
        );
        assert!(!log.is_completed(&quest));

        assert_eq!(
            log.record_objective(&catalog, &quest, OBJECTIVE_CLEAR_MINES),
            QuestUpdate::QuestCompleted(ItemId::from("greater_health_potion"))
        );
        assert!(log.is_completed(&quest));
    }

    #[test]
    fn test_duplicate_objective_is_no_change() {
        let catalog = QuestCatalog::standard();
        let mut log = QuestLog::default();
        let quest = QuestId::from("village_troubles");

        log.record_objective(&catalog, &quest, OBJECTIVE_CLEAR_FOREST);
        assert_eq!(
            log.record_objective(&catalog, &quest, OBJECTIVE_CLEAR_FOREST),
            QuestUpdate::NoChange
        );
    }

    #[test]
    fn test_unknown_objective_is_no_change() {
        let catalog = QuestCatalog::standard();
        let mut log = QuestLog::default();
        assert_eq!(
            log.record_objective(&catalog, &QuestId::from("village_troubles"), "slay_dragon"),
            QuestUpdate::NoChange
        );
    }
}

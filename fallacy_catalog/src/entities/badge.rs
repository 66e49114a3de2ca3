//! Badge definitions.

use serde::{Deserialize, Serialize};

use super::BadgeId;

/// A gamification reward. The achievement that earns it is described in prose only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    /// Display glyph, usually a single emoji.
    pub icon: String,
    pub points: u32,
}

impl Badge {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        points: u32,
    ) -> Self {
        Self {
            id: BadgeId(id),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            points,
        }
    }

    /// Name prefixed with the icon, as shown on the badge grid.
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label() {
        let badge = Badge::new(3, "Quiz Master", "Complete 10 quizzes", "🎓", 50);
        assert_eq!(badge.label(), "🎓 Quiz Master");
        assert_eq!(badge.points, 50);
    }
}

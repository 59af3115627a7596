//! Who may read or write what.
//!
//! The storage layer trusts whatever participant id it is handed; every
//! handler asks [`authorize`] first.

use storage::models::{ParticipantId, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Public,
    Director(ParticipantId),
    Administrator(ParticipantId),
}

impl Actor {
    /// `None` for roles that may not act at all.
    pub fn from_role(participant_id: ParticipantId, role: Role) -> Option<Self> {
        match role {
            Role::Director => Some(Self::Director(participant_id)),
            Role::Administrator => Some(Self::Administrator(participant_id)),
            Role::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ReadRanking,
    ReadMetrics(ParticipantId),
    WriteMetrics(ParticipantId),
    ListDirectors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    /// No identity was presented.
    Unauthenticated,
    /// An identity was presented but lacks the right.
    Forbidden,
}

pub fn authorize(actor: Actor, action: Action) -> Result<(), AccessDenied> {
    match (actor, action) {
        (_, Action::ReadRanking) => Ok(()),
        (Actor::Public, _) => Err(AccessDenied::Unauthenticated),
        (Actor::Administrator(_), _) => Ok(()),
        (Actor::Director(me), Action::ReadMetrics(id) | Action::WriteMetrics(id)) if me == id => {
            Ok(())
        }
        (Actor::Director(_), _) => Err(AccessDenied::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_is_public() {
        assert_eq!(authorize(Actor::Public, Action::ReadRanking), Ok(()));
        assert_eq!(authorize(Actor::Director(1), Action::ReadRanking), Ok(()));
        assert_eq!(authorize(Actor::Administrator(9), Action::ReadRanking), Ok(()));
    }

    #[test]
    fn test_public_needs_identity() {
        for action in [
            Action::ReadMetrics(1),
            Action::WriteMetrics(1),
            Action::ListDirectors,
        ] {
            assert_eq!(
                authorize(Actor::Public, action),
                Err(AccessDenied::Unauthenticated)
            );
        }
    }

    #[test]
    fn test_director_only_touches_own_record() {
        let me = Actor::Director(1);

        assert_eq!(authorize(me, Action::ReadMetrics(1)), Ok(()));
        assert_eq!(authorize(me, Action::WriteMetrics(1)), Ok(()));
        assert_eq!(
            authorize(me, Action::ReadMetrics(2)),
            Err(AccessDenied::Forbidden)
        );
        assert_eq!(
            authorize(me, Action::WriteMetrics(2)),
            Err(AccessDenied::Forbidden)
        );
        assert_eq!(
            authorize(me, Action::ListDirectors),
            Err(AccessDenied::Forbidden)
        );
    }

    #[test]
    fn test_administrator_touches_any_record() {
        let admin = Actor::Administrator(9);

        assert_eq!(authorize(admin, Action::ReadMetrics(1)), Ok(()));
        assert_eq!(authorize(admin, Action::WriteMetrics(2)), Ok(()));
        assert_eq!(authorize(admin, Action::ListDirectors), Ok(()));
    }

    #[test]
    fn test_actor_from_role() {
        assert_eq!(Actor::from_role(1, Role::Director), Some(Actor::Director(1)));
        assert_eq!(
            Actor::from_role(9, Role::Administrator),
            Some(Actor::Administrator(9))
        );
        assert_eq!(Actor::from_role(5, Role::Other), None);
    }
}

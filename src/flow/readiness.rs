// ABOUTME: Readiness signals the wizard gates forward progress on
// The controller only reads these; selection screens own the underlying data

use serde::Serialize;

/// Source of the three "has the user chosen yet?" signals.
///
/// Implementations are read on every controller call, so they should reflect
/// the latest persisted selections rather than a snapshot taken at startup.
#[cfg_attr(test, mockall::automock)]
pub trait ReadinessProvider {
    fn is_church_avatar_selected(&self) -> bool;
    fn is_community_avatar_selected(&self) -> bool;
    fn is_companion_selected(&self) -> bool;
}

/// Point-in-time copy of the readiness flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionReadiness {
    pub church: bool,
    pub community: bool,
    pub companion: bool,
}

impl SelectionReadiness {
    /// Read all three flags from a provider
    pub fn read<R: ReadinessProvider + ?Sized>(provider: &R) -> Self {
        Self {
            church: provider.is_church_avatar_selected(),
            community: provider.is_community_avatar_selected(),
            companion: provider.is_companion_selected(),
        }
    }

    /// True when every category has a selection
    pub fn all(&self) -> bool {
        self.church && self.community && self.companion
    }

    /// Number of categories with a selection
    pub fn selected_count(&self) -> usize {
        [self.church, self.community, self.companion]
            .iter()
            .filter(|flag| **flag)
            .count()
    }
}

/// A snapshot is itself a (frozen) provider
impl ReadinessProvider for SelectionReadiness {
    fn is_church_avatar_selected(&self) -> bool {
        self.church
    }

    fn is_community_avatar_selected(&self) -> bool {
        self.community
    }

    fn is_companion_selected(&self) -> bool {
        self.companion
    }
}

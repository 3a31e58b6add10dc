// ABOUTME: TUI components for the avatar-selection wizard

pub mod layout;
pub mod picker;
pub mod theme;
pub mod wizard;

pub use layout::LayoutComponent;
pub use picker::AvatarPickerComponent;
pub use wizard::WizardComponent;

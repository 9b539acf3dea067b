/// Severity of an in-panel notice, mirroring the alert levels the analytics
/// API's reference frontend uses (info, warning, danger).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Danger,
}

/// A message rendered in place of panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Danger,
            message: message.into(),
        }
    }
}

/// Identifies one output panel of the dashboard. Every fetch targets
/// exactly one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    RegionTrend,
    RegionFactors,
    RegionInsights,
    CropZones,
    CropFactors,
    CropInsights,
    Strategies,
    Prediction,
}

impl PanelId {
    /// Human-readable name of the operation feeding this panel, used in
    /// log lines and generic failure notices.
    pub const fn operation(self) -> &'static str {
        match self {
            Self::RegionTrend => "fetching yield trend",
            Self::RegionFactors | Self::CropFactors => "fetching factor impact",
            Self::RegionInsights => "fetching regional insights",
            Self::CropZones => "fetching yield by region",
            Self::CropInsights => "fetching crop insights",
            Self::Strategies => "fetching improvement strategies",
            Self::Prediction => "predicting yield",
        }
    }
}

/// Lifecycle of a panel's content.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    Idle,
    Loading,
    Ready(T),
    Notice(Notice),
}

/// An output panel plus the generation counter used to discard stale
/// responses. Outstanding requests are never cancelled; a completion that
/// arrives for an older generation is dropped instead of overwriting a
/// newer render.
#[derive(Debug)]
pub struct Panel<T> {
    state: PanelState<T>,
    generation: u64,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self {
            state: PanelState::Idle,
            generation: 0,
        }
    }
}

impl<T> Panel<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> &PanelState<T> {
        &self.state
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new request cycle: the panel shows a loading indicator and
    /// any response from an earlier cycle becomes stale.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = PanelState::Loading;
        self.generation
    }

    /// Apply a completed outcome. Returns false (and leaves the panel
    /// untouched) when the outcome belongs to a stale generation.
    pub fn apply(&mut self, generation: u64, outcome: Result<T, Notice>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = match outcome {
            Ok(value) => PanelState::Ready(value),
            Err(notice) => PanelState::Notice(notice),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_moves_panel_to_loading() {
        let mut panel: Panel<u32> = Panel::new();
        assert_eq!(*panel.state(), PanelState::Idle);

        let generation = panel.begin();
        assert_eq!(generation, 1);
        assert_eq!(*panel.state(), PanelState::Loading);
    }

    #[test]
    fn current_generation_outcome_is_applied() {
        let mut panel: Panel<u32> = Panel::new();
        let generation = panel.begin();

        assert!(panel.apply(generation, Ok(7)));
        assert_eq!(*panel.state(), PanelState::Ready(7));
    }

    #[test]
    fn stale_generation_outcome_is_discarded() {
        let mut panel: Panel<u32> = Panel::new();
        let stale = panel.begin();
        let current = panel.begin();

        assert!(!panel.apply(stale, Ok(1)));
        assert_eq!(*panel.state(), PanelState::Loading);

        assert!(panel.apply(current, Ok(2)));
        assert_eq!(*panel.state(), PanelState::Ready(2));
    }

    #[test]
    fn notice_outcome_replaces_loading() {
        let mut panel: Panel<u32> = Panel::new();
        let generation = panel.begin();

        panel.apply(generation, Err(Notice::info("no data")));
        assert_eq!(
            *panel.state(),
            PanelState::Notice(Notice::info("no data"))
        );
    }
}

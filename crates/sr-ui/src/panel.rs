//! Score panel: bet / win / balance display
//!
//! Pure display mirror of the engine's numbers; updating it never feeds
//! anything back into game logic.

/// Column labels in display order
pub const PANEL_LABELS: [&str; 3] = ["BET", "WIN", "BALANCE"];

/// Unscaled width of one panel column (px)
pub const PANEL_COLUMN_WIDTH: f32 = 200.0;

/// The bet / win / balance text panel
#[derive(Debug, Clone)]
pub struct ScorePanel {
    bet: u32,
    win: u32,
    balance: i64,
}

impl ScorePanel {
    pub fn new(bet: u32, balance: i64) -> Self {
        Self {
            bet,
            win: 0,
            balance,
        }
    }

    /// Mirror a new balance
    pub fn update_balance(&mut self, balance: i64) {
        self.balance = balance;
    }

    /// Mirror the last spin's win amount (0 clears the display)
    pub fn update_win(&mut self, win: u32) {
        self.win = win;
    }

    pub fn bet_text(&self) -> String {
        format!("${}", self.bet)
    }

    /// Empty while there is nothing to show
    pub fn win_text(&self) -> String {
        if self.win > 0 {
            format!("${}", self.win)
        } else {
            String::new()
        }
    }

    pub fn balance_text(&self) -> String {
        format!("${}", self.balance)
    }

    /// Values in the same order as [`PANEL_LABELS`]
    pub fn column_texts(&self) -> [String; 3] {
        [self.bet_text(), self.win_text(), self.balance_text()]
    }

    /// Horizontal centers of the three columns, centered as a block
    pub fn column_centers(panel_width: f32, column_width: f32) -> [f32; 3] {
        let total = column_width * 3.0;
        let start = (panel_width - total) / 2.0;
        [
            start + column_width * 0.5,
            start + column_width * 1.5,
            start + column_width * 2.5,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texts_mirror_updates() {
        let mut panel = ScorePanel::new(2, 100);
        assert_eq!(panel.bet_text(), "$2");
        assert_eq!(panel.win_text(), "");
        assert_eq!(panel.balance_text(), "$100");

        panel.update_win(5);
        panel.update_balance(103);
        assert_eq!(panel.win_text(), "$5");
        assert_eq!(panel.balance_text(), "$103");

        panel.update_win(0);
        assert_eq!(panel.win_text(), "");
    }

    #[test]
    fn test_negative_balance_renders() {
        let mut panel = ScorePanel::new(2, 0);
        panel.update_balance(-4);
        assert_eq!(panel.balance_text(), "$-4");
    }

    #[test]
    fn test_column_centers_are_centered() {
        let centers = ScorePanel::column_centers(1200.0, 200.0);
        assert_eq!(centers, [400.0, 600.0, 800.0]);
    }
}

//! Flavor text for the dashboard summary.
//!
//! Presentation-only: the mood band is a deterministic function of the
//! aggregate stats, the message within a bank is picked at random. Nothing
//! here feeds back into filtering or scoring.

use rand::Rng;

use crate::stats::AggregateStats;

/// Tone of the dashboard message, derived from the current stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    /// Score 80+ with nothing overdue.
    Celebrate,
    /// Score 60-79, or a high score with light overdue load.
    Encourage,
    /// Something is due today.
    Nudge,
    /// Overdue work is piling up or the score is low.
    Rally,
}

impl Mood {
    /// Band selection. Overdue load wins over score, due-today over praise.
    pub fn for_stats(stats: &AggregateStats) -> Mood {
        if stats.total_overdue >= 3 || stats.productivity_score < 40 {
            return Mood::Rally;
        }
        if stats.due_today > 0 {
            return Mood::Nudge;
        }
        if stats.productivity_score >= 80 && stats.total_overdue == 0 {
            return Mood::Celebrate;
        }
        Mood::Encourage
    }

    fn bank(&self) -> &'static [&'static str] {
        match self {
            Mood::Celebrate => &[
                "Everything on track. Keep the streak going.",
                "Clean board, strong score. Nice work.",
                "On time and on top of it.",
            ],
            Mood::Encourage => &[
                "Solid progress. A little push clears the rest.",
                "Good pace. Knock out the next one.",
                "Steady as it goes.",
            ],
            Mood::Nudge => &[
                "Something is due today. Good time to start it.",
                "Today's deadline is waiting on you.",
                "One due today. Get it off the board.",
            ],
            Mood::Rally => &[
                "Overdue work is stacking up. Pick one and finish it.",
                "The backlog needs attention. Start small.",
                "Time to dig out. One task at a time.",
            ],
        }
    }
}

/// Pick a message for the current stats using the supplied RNG.
pub fn pick_message<R: Rng + ?Sized>(stats: &AggregateStats, rng: &mut R) -> &'static str {
    let bank = Mood::for_stats(stats).bank();
    bank[rng.gen_range(0..bank.len())]
}

/// Convenience wrapper over the thread-local RNG.
pub fn message(stats: &AggregateStats) -> &'static str {
    pick_message(stats, &mut rand::thread_rng())
}

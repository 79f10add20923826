//! A small seed catalog for local development and demos.

use rust_decimal_macros::dec;

use crate::types::NewMatchup;

/// Five well-known matchups, used when the server is started with demo seeding enabled.
pub fn demo_matchups() -> Vec<NewMatchup> {
    vec![
        NewMatchup::with_multipliers("Lakers", "Celtics", "Basketball", dec!(1.8), dec!(2.2)),
        NewMatchup::with_multipliers("Chiefs", "Eagles", "Football", dec!(1.5), dec!(2.5)),
        NewMatchup::with_multipliers("Yankees", "Red Sox", "Baseball", dec!(2.0), dec!(1.9)),
        NewMatchup::with_multipliers("Manchester United", "Liverpool", "Soccer", dec!(2.3), dec!(1.7)),
        NewMatchup::with_multipliers("Maple Leafs", "Canadiens", "Hockey", dec!(1.6), dec!(2.4)),
    ]
}

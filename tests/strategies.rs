// tests/strategies.rs
use hog::strategies::{
    BaconParams, BaconStrategy, FinalParams, FinalStrategy, Strategy, SwapStrategy, always_roll,
    bacon_strategy, final_strategy, swap_strategy,
};

const DEFAULTS: BaconParams = BaconParams { margin: 8, num_rolls: 5 };

#[test]
fn always_roll_ignores_scores() {
    let s = always_roll(5);
    assert_eq!(s.num_rolls(0, 0), 5);
    assert_eq!(s.num_rolls(99, 99), 5);
}

#[test]
fn defaults_are_documented_values() {
    assert_eq!(BaconParams::default(), DEFAULTS);
    assert_eq!(FinalParams::default(), FinalParams { margin: 8 });
}

#[test]
fn bacon_takes_free_points_above_margin() {
    assert_eq!(bacon_strategy(0, 0, DEFAULTS), 5);
    assert_eq!(bacon_strategy(0, 17, DEFAULTS), 0); // 8 points
    assert_eq!(bacon_strategy(0, 16, DEFAULTS), 5); // 7 points
    assert_eq!(bacon_strategy(10, 38, DEFAULTS), 0);
    assert_eq!(bacon_strategy(0, 16, BaconParams { margin: 7, num_rolls: 4 }), 0);
    assert_eq!(bacon_strategy(0, 15, BaconParams { margin: 7, num_rolls: 4 }), 4);
}

#[test]
fn swap_takes_beneficial_swaps() {
    // 3 + free bacon(10) = 5, half of 10
    assert_eq!(swap_strategy(3, 10, DEFAULTS), 0);
    assert_eq!(swap_strategy(1, 16, DEFAULTS), 0);
    assert_eq!(bacon_strategy(3, 10, DEFAULTS), 5);
}

#[test]
fn swap_avoids_harmful_swaps() {
    // 6 + free bacon(7) = 14, double of 7; plain bacon would take the 8 points
    assert_eq!(bacon_strategy(6, 7, DEFAULTS), 0);
    assert_eq!(swap_strategy(6, 7, DEFAULTS), 5);
    assert_eq!(swap_strategy(26, 17, BaconParams { margin: 8, num_rolls: 3 }), 3);
}

#[test]
fn swap_falls_back_to_bacon() {
    assert_eq!(swap_strategy(0, 0, DEFAULTS), 5);
    assert_eq!(swap_strategy(0, 17, DEFAULTS), 0);
    assert_eq!(swap_strategy(30, 20, DEFAULTS), 5);
}

#[test]
fn final_strategy_pushes_opponent_onto_four_sided_dice() {
    // 13 + 0 is 1 short of 14, free bacon(0) is exactly 1
    assert_eq!(final_strategy(13, 0, FinalParams::default()), 0);
    // 2 + 2 is 3 short of 7, free bacon(2) is 3
    assert_eq!(final_strategy(2, 2, FinalParams::default()), 0);
}

#[test]
fn final_strategy_rolls_three_when_margins_land_on_seven() {
    // 0 + 8 + 5 + 8 = 21
    assert_eq!(final_strategy(0, 5, FinalParams::default()), 3);
    assert_eq!(final_strategy(5, 0, FinalParams::default()), 3);
}

#[test]
fn final_strategy_cautious_rolls() {
    let p = FinalParams::default();
    assert_eq!(final_strategy(12, 30, p), 6); // behind
    assert_eq!(final_strategy(0, 0, p), 6); // early
    assert_eq!(final_strategy(30, 20, p), 5);
    assert_eq!(final_strategy(40, 30, p), 5);
    assert_eq!(final_strategy(90, 50, p), 4); // near the goal
}

#[test]
fn final_strategy_still_takes_big_bacon() {
    assert_eq!(final_strategy(10, 38, FinalParams::default()), 0);
    assert_eq!(final_strategy(3, 27, FinalParams::default()), 0);
}

#[test]
fn named_strategies_match_functions() {
    let strategies: [(&dyn Strategy, fn(u32, u32) -> u32); 3] = [
        (&BaconStrategy::default(), |s, o| bacon_strategy(s, o, DEFAULTS)),
        (&SwapStrategy::default(), |s, o| swap_strategy(s, o, DEFAULTS)),
        (&FinalStrategy::default(), |s, o| final_strategy(s, o, FinalParams::default())),
    ];
    for (strategy, f) in strategies {
        for score in (0..100).step_by(3) {
            for opponent_score in (0..100).step_by(7) {
                assert_eq!(strategy.num_rolls(score, opponent_score), f(score, opponent_score));
            }
        }
    }
}

#[test]
fn roll_counts_stay_in_range() {
    for score in 0..100 {
        for opponent_score in 0..100 {
            let n = final_strategy(score, opponent_score, FinalParams::default());
            assert!(n <= 10, "final_strategy({score}, {opponent_score}) = {n}");
        }
    }
}

#[test]
fn extreme_scores_do_not_overflow() {
    assert_eq!(bacon_strategy(u32::MAX, u32::MAX, DEFAULTS), 0);
    assert_eq!(swap_strategy(u32::MAX, 5, DEFAULTS), 5);
    assert_eq!(swap_strategy(u32::MAX, u32::MAX, DEFAULTS), 0);
    // sum is 6 mod 7, free bacon is 10, behind-or-level rolls 6, then bacon takes 10 points
    assert_eq!(final_strategy(u32::MAX, u32::MAX, FinalParams::default()), 0);
    let wide = FinalParams { margin: u32::MAX };
    let _ = final_strategy(u32::MAX, u32::MAX, wide);
}

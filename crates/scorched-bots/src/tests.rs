#[cfg(test)]
mod tests {
    use scorched_core::bot::{BotError, DecisionSource, TankSummary};
    use scorched_core::types::Position;
    use serde_json::json;

    use crate::nearest::NearestTargetBot;
    use crate::random::RandomAttacker;
    use crate::scripted::ScriptedBot;

    fn summary(name: &str, x: f64, active: bool) -> TankSummary {
        TankSummary {
            name: name.to_string(),
            position: Position::new(x, 150.0),
            health: 100,
            active,
        }
    }

    // ---- RandomAttacker ----

    #[test]
    fn test_random_moves_in_range() {
        let mut bot = RandomAttacker::new("Randomer", "green", 9);
        for _ in 0..500 {
            let mv = bot.attack(&[]).unwrap();
            assert!((-90.0..90.0).contains(&mv.angle), "angle {} out of range", mv.angle);
            assert!((0.0..100.0).contains(&mv.power), "power {} out of range", mv.power);
        }
    }

    #[test]
    fn test_random_is_seeded() {
        let mut a = RandomAttacker::new("a", "green", 77);
        let mut b = RandomAttacker::new("b", "green", 77);
        for _ in 0..20 {
            assert_eq!(a.attack(&[]).unwrap(), b.attack(&[]).unwrap());
        }
    }

    #[test]
    fn test_default_roster_names() {
        assert_eq!(RandomAttacker::numbered(0, 1).name(), "Randomer");
        assert_eq!(RandomAttacker::numbered(1, 1).name(), "Random 2");
        assert_eq!(RandomAttacker::numbered(2, 1).name(), "Random 3");
        assert_eq!(RandomAttacker::numbered(5, 1).name(), "Random 6");
        assert_eq!(RandomAttacker::numbered(0, 1).preferred_color(), "green");
    }

    // ---- ScriptedBot ----

    #[test]
    fn test_script_replays_in_order() {
        let mut bot = ScriptedBot::from_moves("Human", "red", &[(10.0, 20.0), (-5.0, 90.0)]);
        assert_eq!(bot.attack(&[]).unwrap().angle, 10.0);
        assert_eq!(bot.attack(&[]).unwrap().power, 90.0);
        assert!(matches!(bot.attack(&[]), Err(BotError::Declined(_))));
    }

    #[test]
    fn test_script_malformed_entry() {
        let mut bot = ScriptedBot::new("Human", "red", vec![json!(45), json!([1, 2])]);
        assert!(matches!(bot.attack(&[]), Err(BotError::Malformed(_))));
        assert_eq!(bot.remaining(), 1, "a malformed entry is still consumed");
    }

    #[test]
    fn test_script_records_feedback() {
        let mut bot = ScriptedBot::from_moves("Human", "red", &[]);
        bot.update_last_hit(Position::new(3.0, 4.0));
        assert_eq!(bot.hits(), &[Position::new(3.0, 4.0)]);
    }

    // ---- NearestTargetBot ----

    #[test]
    fn test_nearest_picks_closest_enemy() {
        let mut bot = NearestTargetBot::new("Aimer", "blue");
        let tanks = vec![
            summary("Aimer", 100.0, true),
            summary("Far", 700.0, false),
            summary("Near", 400.0, false),
        ];
        let mv = bot.attack(&tanks).unwrap();
        assert!(mv.angle > 0.0, "both enemies are to the right");
        assert!((0.0..=100.0).contains(&mv.power));
    }

    #[test]
    fn test_nearest_skips_own_tanks() {
        let mut bot = NearestTargetBot::new("Aimer", "blue");
        let tanks = vec![
            summary("Aimer", 300.0, true),
            summary("Aimer", 340.0, false),
            summary("Enemy", 100.0, false),
        ];
        let mv = bot.attack(&tanks).unwrap();
        assert!(mv.angle < 0.0, "the only enemy is to the left");
    }

    #[test]
    fn test_nearest_without_active_tank_fails() {
        let mut bot = NearestTargetBot::new("Aimer", "blue");
        let tanks = vec![summary("Enemy", 100.0, false)];
        assert!(matches!(bot.attack(&tanks), Err(BotError::Strategy(_))));
    }

    #[test]
    fn test_nearest_declines_without_targets() {
        let mut bot = NearestTargetBot::new("Aimer", "blue");
        let tanks = vec![summary("Aimer", 100.0, true)];
        assert!(matches!(bot.attack(&tanks), Err(BotError::Declined(_))));
    }

    #[test]
    fn test_feedback_shifts_aim_against_the_miss() {
        let mut bot = NearestTargetBot::new("Aimer", "blue");
        let tanks = vec![summary("Aimer", 100.0, true), summary("Enemy", 500.0, false)];
        bot.attack(&tanks).unwrap();
        bot.update_last_hit(Position::new(530.0, 150.0));
        assert!(bot.correction() < 0.0, "overshot to the right, aim further left");

        // A new target resets the correction.
        let tanks = vec![summary("Aimer", 100.0, true), summary("Other", 300.0, false)];
        bot.attack(&tanks).unwrap();
        assert_eq!(bot.correction(), 0.0);
    }

    #[test]
    fn test_sunken_target_keeps_correction() {
        let mut bot = NearestTargetBot::new("Aimer", "blue");
        let tanks = vec![summary("Aimer", 100.0, true), summary("Enemy", 500.0, false)];
        bot.attack(&tanks).unwrap();
        bot.update_last_hit(Position::new(530.0, 150.0));
        let correction = bot.correction();
        assert!(correction < 0.0);

        // The enemy dropped into a crater: same tank, lower ground.
        let mut sunk = summary("Enemy", 500.0, false);
        sunk.position.y -= 20.0;
        let tanks = vec![summary("Aimer", 100.0, true), sunk];
        bot.attack(&tanks).unwrap();
        assert_eq!(bot.correction(), correction, "correction survives a height change");
    }
}

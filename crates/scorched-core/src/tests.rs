#[cfg(test)]
mod tests {
    use crate::colors::Rgb;
    use crate::commands::SessionCommand;
    use crate::enums::*;
    use crate::events::{AudioEvent, GameEvent};
    use crate::state::{GameStateSnapshot, PlayerView, ShellView, TankView};
    use crate::types::{Explosion, Position, SimTime, TankRef};

    #[test]
    fn test_turn_phase_serde() {
        let variants = vec![
            TurnPhase::AwaitingMove,
            TurnPhase::Animating,
            TurnPhase::Resolving,
            TurnPhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TurnPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_session_command_serde() {
        for cmd in [SessionCommand::PlayAgain, SessionCommand::Quit] {
            let json = serde_json::to_string(&cmd).unwrap();
            assert!(json.contains("\"type\""), "commands are internally tagged: {}", json);
            let back: SessionCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    #[test]
    fn test_session_command_from_host_json() {
        let cmd: SessionCommand = serde_json::from_str(r#"{"type":"PlayAgain"}"#).unwrap();
        assert_eq!(cmd, SessionCommand::PlayAgain);
    }

    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::Fire,
            AudioEvent::GroundStrike,
            AudioEvent::TankHit,
            AudioEvent::TankExplosion,
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<AudioEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, back);
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::ShotFired {
                player: 0,
                tank: TankRef::new(0, 0),
                angle_degrees: 12.0,
                power: 50,
            },
            GameEvent::TurnForfeited {
                player: 1,
                reason: ForfeitReason::Malformed,
            },
            GameEvent::Explosion {
                center: Position::new(10.0, 20.0),
                radius: 30.0,
                power: 50.0,
                chained: false,
            },
            GameEvent::TankDestroyed {
                tank: TankRef::new(2, 1),
                position: Position::new(300.0, 100.0),
            },
            GameEvent::GameOver { winner: None },
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<GameEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, back);
    }

    #[test]
    fn test_explosion_presets() {
        let shell = Explosion::shell(Position::new(1.0, 2.0));
        assert!(!shell.chained);
        assert_eq!(shell.radius, crate::constants::SHELL_EXPLOSION_RADIUS);
        let tank = Explosion::tank(Position::new(1.0, 2.0));
        assert!(tank.chained);
        assert_eq!(tank.power, crate::constants::TANK_EXPLOSION_POWER);
    }

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
        assert!((a.horizontal_range_to(&b) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance();
        t.advance();
        assert_eq!(t.tick, 2);
        assert_eq!(t.turn, 0);
    }

    #[test]
    fn test_snapshot_serde() {
        let snap = GameStateSnapshot {
            time: SimTime { tick: 7, turn: 2 },
            phase: TurnPhase::Animating,
            round: 1,
            width: 800.0,
            height: 600.0,
            terrain: vec![Position::new(0.0, 100.0), Position::new(4.0, 101.0)],
            players: vec![PlayerView {
                index: 0,
                name: "Randomer".into(),
                color: "green".into(),
                rgb: Rgb::new(0, 255, 0),
                alive_tanks: 1,
                last_hit: None,
            }],
            tanks: vec![TankView {
                tank: TankRef::new(0, 0),
                position: Position::new(2.0, 100.5),
                angle: 0.0,
                power: 50,
                health: 100,
                max_health: 100,
                rgb: Rgb::new(0, 255, 0),
                alive: true,
            }],
            active_player: Some(0),
            active_tank: Some(TankRef::new(0, 0)),
            shell: Some(ShellView {
                position: Position::new(2.0, 130.0),
                elapsed: 0.3,
            }),
            winner: None,
            events: vec![],
            audio_events: vec![AudioEvent::Fire],
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time.tick, 7);
        assert_eq!(back.phase, TurnPhase::Animating);
        assert_eq!(back.terrain.len(), 2);
        assert_eq!(back.tanks[0].power, 50);
        assert_eq!(back.active_tank, Some(TankRef::new(0, 0)));
        assert_eq!(back.audio_events, vec![AudioEvent::Fire]);
    }

    #[test]
    fn test_snapshot_default() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.phase, TurnPhase::AwaitingMove);
        assert!(snap.tanks.is_empty());
        assert!(snap.winner.is_none());
    }
}

mod common;

use common::*;
use jutsu_application::process_frame;
use jutsu_effects::{EffectDescriptor, EffectSession, JutsuKind, COOLDOWN_MS};

fn chidori_palm_x(session: &EffectSession) -> f64 {
    match session.descriptor() {
        Some(EffectDescriptor::Chidori(d)) => d.palm.x,
        other => panic!("expected a chidori descriptor, got {other:?}"),
    }
}

mod insufficient_input {
    use super::*;

    #[test]
    fn test_zero_hands_never_trigger() {
        let mut session = EffectSession::new();
        let outcome = process_frame(&mut session, 1000, &[], true);
        assert!(outcome.triggered.is_none());
        assert!(session.active().is_none());
    }

    #[test]
    fn test_single_hand_never_triggers() {
        let mut session = EffectSession::new();
        for hand in [seal_hand(0.5, 0.8), open_hand_up(0.5, 0.7)] {
            let outcome = process_frame(&mut session, 1000, &[hand], true);
            assert!(outcome.readout.is_empty());
            assert!(outcome.triggered.is_none());
        }
    }
}

mod triggers {
    use super::*;

    #[test]
    fn test_each_seal_triggers_its_effect() {
        let cases = [
            (kage_pair(), JutsuKind::KageBunshin, false),
            (chidori_grip(0.5), JutsuKind::Chidori, true),
            (rasengan_cup(), JutsuKind::Rasengan, true),
        ];

        for (hands, kind, has_descriptor) in cases {
            let mut session = EffectSession::new();
            let effect = process_frame(&mut session, 1000, &hands, true)
                .triggered
                .unwrap();

            assert_eq!(effect.kind(), kind);
            assert_eq!(effect.expires_at_ms, 1000 + kind.duration_ms());
            assert_eq!(session.cooldown_until_ms(), Some(1000 + COOLDOWN_MS));
            assert_eq!(session.descriptor().is_some(), has_descriptor);
        }
    }

    #[test]
    fn test_closed_gate_scores_but_does_not_trigger() {
        let mut session = EffectSession::new();
        let outcome = process_frame(&mut session, 1000, &kage_pair(), false);

        assert!(outcome.readout.kage_bunshin.is_some());
        assert!(outcome.triggered.is_none());
        assert!(session.active().is_none());
    }

    #[test]
    fn test_cooldown_window() {
        let mut session = EffectSession::new();
        let t = 5000;
        process_frame(&mut session, t, &chidori_grip(0.5), true)
            .triggered
            .unwrap();

        let blocked = process_frame(&mut session, t + 1000, &kage_pair(), true);
        assert!(blocked.readout.kage_bunshin.is_some());
        assert!(blocked.triggered.is_none());
        assert_eq!(session.active_kind(), Some(JutsuKind::Chidori));

        let later = process_frame(&mut session, t + 4301, &kage_pair(), true);
        assert_eq!(later.expired, Some(JutsuKind::Chidori));
        assert_eq!(later.triggered.unwrap().kind(), JutsuKind::KageBunshin);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = EffectSession::new();
        let mut second = EffectSession::new();

        process_frame(&mut first, 1000, &kage_pair(), true);
        let outcome = process_frame(&mut second, 1000, &rasengan_cup(), true);

        assert_eq!(first.active_kind(), Some(JutsuKind::KageBunshin));
        assert_eq!(outcome.triggered.unwrap().kind(), JutsuKind::Rasengan);
    }
}

mod live_tracking {
    use super::*;

    #[test]
    fn test_chidori_follows_hand_without_extending() {
        let mut session = EffectSession::new();
        let t = 2000;
        process_frame(&mut session, t, &chidori_grip(0.5), true)
            .triggered
            .unwrap();
        let d0 = chidori_palm_x(&session);

        let outcome = process_frame(&mut session, t + 500, &chidori_grip(0.55), true);
        assert!(outcome.refreshed);
        assert!(outcome.triggered.is_none());
        assert!((chidori_palm_x(&session) - d0 - 0.05).abs() < 1e-4);
        assert_eq!(session.expires_at_ms(), Some(t + 2500));
        assert_eq!(session.cooldown_until_ms(), Some(t + COOLDOWN_MS));

        let idle = process_frame(&mut session, t + 2501, &[], true);
        assert_eq!(idle.expired, Some(JutsuKind::Chidori));
        assert!(session.active().is_none());
        assert!(session.descriptor().is_none());
    }

    #[test]
    fn test_no_refresh_with_gate_closed() {
        let mut session = EffectSession::new();
        process_frame(&mut session, 0, &chidori_grip(0.5), true);
        let d0 = chidori_palm_x(&session);

        let outcome = process_frame(&mut session, 100, &chidori_grip(0.55), false);
        assert!(!outcome.refreshed);
        assert_eq!(chidori_palm_x(&session), d0);
    }

    #[test]
    fn test_other_kind_does_not_refresh() {
        let mut session = EffectSession::new();
        process_frame(&mut session, 0, &rasengan_cup(), true);

        let outcome = process_frame(&mut session, 100, &chidori_grip(0.5), true);
        assert!(outcome.readout.chidori.is_some());
        assert!(!outcome.refreshed);
        assert!(matches!(session.descriptor(), Some(EffectDescriptor::Rasengan(_))));
    }

    #[test]
    fn test_lost_hands_keep_last_descriptor() {
        let mut session = EffectSession::new();
        process_frame(&mut session, 0, &rasengan_cup(), true);
        let before = session.descriptor();

        let outcome = process_frame(&mut session, 300, &[], true);
        assert!(!outcome.refreshed);
        assert_eq!(session.descriptor(), before);
    }
}

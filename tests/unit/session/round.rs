use super::*;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::classify::process::ClassifierCommand;
use crate::foundation::core::Bgra8;
use crate::raster::display::InMemorySurface;

fn output_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("inkling_round_{}", std::process::id()))
        .join(name)
        .join("Painting_0.ndjson")
}

fn config(name: &str, classifier: ClassifierCommand) -> GameConfig {
    GameConfig {
        canvas_width: 64,
        canvas_height: 48,
        brush_radius: 3,
        output_path: output_path(name),
        classifier,
        ..GameConfig::default()
    }
}

fn echo(script: &str) -> ClassifierCommand {
    ClassifierCommand::new("sh").arg("-c").arg(script)
}

fn driver(name: &str, classifier: ClassifierCommand) -> RoundDriver<InMemorySurface> {
    RoundDriver::new(config(name, classifier), InMemorySurface::new()).unwrap()
}

fn ink(d: &RoundDriver<InMemorySurface>) -> usize {
    d.canvas().buffer().count_pixels(Bgra8::INK)
}

fn scribble(d: &mut RoundDriver<InMemorySurface>) {
    d.start_drawing();
    d.draw(Some(PixelCoord::new(5, 5))).unwrap();
    d.draw(Some(PixelCoord::new(20, 10))).unwrap();
    d.draw(Some(PixelCoord::new(40, 30))).unwrap();
    d.stop_drawing();
}

fn poll_until_done(d: &mut RoundDriver<InMemorySurface>) -> RoundOutcome {
    let deadline = Instant::now() + Duration::from_secs(20);
    loop {
        if let Some(outcome) = d.poll() {
            return outcome;
        }
        assert!(Instant::now() < deadline, "round never finished");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = GameConfig {
        brush_radius: 0,
        ..GameConfig::default()
    };
    assert!(RoundDriver::new(cfg, InMemorySurface::new()).is_err());
}

#[test]
fn input_is_ignored_before_the_round_starts() {
    let mut d = driver("idle", ClassifierCommand::default());
    assert_eq!(d.state(), DrawingState::WaitingForStart);
    d.start_drawing();
    assert_eq!(d.draw(Some(PixelCoord::new(10, 10))).unwrap(), 0);
    assert!(!d.stop_drawing());
    assert_eq!(ink(&d), 0);
    assert!(d.poll().is_none());
    assert!(d.word().is_none());
}

#[test]
fn confirm_starts_a_round_with_a_configured_word() {
    let mut d = driver("start", ClassifierCommand::default());
    assert_eq!(d.confirm().unwrap(), DrawingState::Drawing);
    let word = d.word().unwrap();
    assert!(d.config().classes.iter().any(|c| c == word));
    assert_eq!(d.canvas().size().width, 64);
    assert_eq!(d.canvas().brush().radius(), 3);
}

#[test]
fn same_seed_asks_for_the_same_words() {
    let mut a = driver("seed_a", ClassifierCommand::default());
    let mut b = driver("seed_b", ClassifierCommand::default());
    a.confirm().unwrap();
    b.confirm().unwrap();
    assert_eq!(a.word(), b.word());
}

#[test]
fn drawing_and_reset_only_while_drawing() {
    let mut d = driver("reset", ClassifierCommand::default());
    d.confirm().unwrap();
    scribble(&mut d);
    assert!(ink(&d) > 0);
    assert_eq!(d.canvas().painting().len(), 1);

    d.reset().unwrap();
    assert_eq!(ink(&d), 0);
    assert!(d.canvas().painting().is_empty());
}

#[test]
fn miss_breaks_interpolation() {
    let mut d = driver("miss", ClassifierCommand::default());
    d.confirm().unwrap();
    d.start_drawing();
    d.draw(Some(PixelCoord::new(2, 2))).unwrap();
    assert_eq!(d.draw(None).unwrap(), 0);
    assert_eq!(d.draw(Some(PixelCoord::new(40, 40))).unwrap(), 0);
}

#[test]
fn confirm_while_pointer_is_down_exports_committed_strokes_only() {
    let mut d = driver("held", ClassifierCommand::new("inkling-no-such-classifier-binary"));
    d.confirm().unwrap();
    d.start_drawing();
    d.draw(Some(PixelCoord::new(5, 5))).unwrap();
    d.draw(Some(PixelCoord::new(30, 30))).unwrap();

    assert_eq!(d.confirm().unwrap(), DrawingState::Evaluating);
    assert_eq!(std::fs::read_to_string(output_path("held")).unwrap(), "");
    assert!(d.canvas().painting().is_empty());
    assert_eq!(d.canvas().current_stroke().len(), 2);
    assert!(!d.stop_drawing());
}

#[test]
fn spawn_failure_ends_the_round_as_failed() {
    let mut d = driver("no_program", ClassifierCommand::new("inkling-no-such-classifier-binary"));
    d.confirm().unwrap();
    scribble(&mut d);
    assert_eq!(d.confirm().unwrap(), DrawingState::Evaluating);
    match poll_until_done(&mut d) {
        RoundOutcome::Failed {
            exit_code, stderr, ..
        } => {
            assert_eq!(exit_code, None);
            assert!(!stderr.is_empty());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(d.state(), DrawingState::RoundEnded);
}

#[cfg(unix)]
#[test]
fn full_round_exports_and_reports_prediction() {
    let mut d = driver("full", echo("grep -q '\"drawing\"' \"$0\" || exit 5; echo thinking; echo axe"));
    d.confirm().unwrap();
    let word = d.word().unwrap().to_string();
    scribble(&mut d);

    assert_eq!(d.confirm().unwrap(), DrawingState::Evaluating);
    let text = std::fs::read_to_string(output_path("full")).unwrap();
    assert!(text.starts_with(&format!("{{\"word\":\"{word}\"")), "{text}");

    // Input and confirm are ignored until the result is in.
    assert_eq!(d.confirm().unwrap(), DrawingState::Evaluating);
    assert_eq!(d.draw(Some(PixelCoord::new(1, 1))).unwrap(), 0);

    let outcome = poll_until_done(&mut d);
    assert_eq!(
        outcome,
        RoundOutcome::Predicted {
            word: word.clone(),
            label: "axe".to_string()
        }
    );
    assert_eq!(outcome.is_correct(), word == "axe");
    assert_eq!(d.state(), DrawingState::RoundEnded);
    assert!(d.poll().is_none());

    // Next round starts blank.
    assert_eq!(d.confirm().unwrap(), DrawingState::Drawing);
    assert_eq!(ink(&d), 0);
}

#[cfg(unix)]
#[test]
fn empty_drawing_is_still_submitted() {
    let mut d = driver("empty", echo("test -s \"$0\" && echo full || echo Empty"));
    d.confirm().unwrap();
    d.confirm().unwrap();
    assert_eq!(std::fs::read_to_string(output_path("empty")).unwrap(), "");
    match d.wait().unwrap() {
        RoundOutcome::Predicted { label, .. } => assert_eq!(label, "Empty"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn non_zero_exit_is_reported_with_stderr() {
    let mut d = driver("exit", echo("echo no model >&2; exit 2"));
    d.confirm().unwrap();
    scribble(&mut d);
    d.confirm().unwrap();
    assert_eq!(
        d.wait().unwrap(),
        RoundOutcome::Failed {
            word: d.word().unwrap().to_string(),
            exit_code: Some(2),
            stderr: "no model\n".to_string(),
        }
    );
}

#[cfg(unix)]
#[test]
fn silent_classifier_is_a_failure() {
    let mut d = driver("silent", echo("true"));
    d.confirm().unwrap();
    d.confirm().unwrap();
    let outcome = d.wait().unwrap();
    assert!(matches!(
        outcome,
        RoundOutcome::Failed {
            exit_code: Some(0),
            ..
        }
    ));
    assert!(!outcome.is_correct());
}

//! End-to-end tests for the full pushlightd stack.
//!
//! Each test wires the real gate, alert service and bridge to a virtual bulb
//! and the filesystem override reader, then feeds a scripted notification
//! stream. No network socket is opened.

use std::collections::VecDeque;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use pushlight_adapter_state_file::FsOverrideReader;
use pushlight_adapter_virtual::{ColorMode, VirtualBulb};
use pushlight_app::bridge::Bridge;
use pushlight_app::ports::{NotificationSource, StreamEvent};
use pushlight_app::services::alert_service::AlertService;
use pushlight_app::services::gate_evaluator::GateEvaluator;
use pushlight_domain::config::{AlertConfig, HourWindow};
use pushlight_domain::error::AlertError;
use pushlight_domain::light::{Group, LightCommand};
use pushlight_domain::notification::NotificationEvent;

/// Replays a fixed list of stream events, then reports exhaustion.
struct ScriptedStream {
    events: VecDeque<StreamEvent>,
}

impl ScriptedStream {
    fn connected(pushes: impl IntoIterator<Item = NotificationEvent>) -> Self {
        Self::from_events(
            std::iter::once(StreamEvent::Connected)
                .chain(pushes.into_iter().map(StreamEvent::Push))
                .chain(std::iter::once(StreamEvent::Closed)),
        )
    }

    fn from_events(events: impl IntoIterator<Item = StreamEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl NotificationSource for ScriptedStream {
    fn next_event(&mut self) -> impl Future<Output = Option<StreamEvent>> + Send {
        let event = self.events.pop_front();
        async move { event }
    }

    fn close(&mut self) -> impl Future<Output = ()> + Send {
        self.events.clear();
        async {}
    }
}

type TestService = AlertService<VirtualBulb, FsOverrideReader>;

fn service(config: AlertConfig) -> Arc<TestService> {
    let gate = GateEvaluator::new(config, FsOverrideReader);
    Arc::new(AlertService::new(gate, VirtualBulb::default()))
}

async fn run(service: &Arc<TestService>, mut stream: ScriptedStream) -> Result<(), AlertError> {
    Bridge::new(Arc::clone(service)).run(&mut stream).await
}

fn flashes(bulb: &VirtualBulb) -> usize {
    bulb.history()
        .iter()
        .filter(|cmd| matches!(cmd, LightCommand::On(_)))
        .count()
}

fn state_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "pushlightd-{name}-{}.state",
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn should_flash_white_at_full_brightness_without_color() {
    let service = service(AlertConfig::default());

    run(&service, ScriptedStream::connected([NotificationEvent::ordinary(None)]))
        .await
        .unwrap();

    let bulb = service.light();
    assert_eq!(
        bulb.history(),
        vec![
            LightCommand::On(Group::ALL),
            LightCommand::Brightness(20),
            LightCommand::Brightness(100),
        ]
    );
    assert_eq!(bulb.state().brightness, 100);
    assert_eq!(bulb.state().mode, ColorMode::White);
}

#[tokio::test(start_paused = true)]
async fn should_flash_app_color_and_return_to_white() {
    let group = Group::new(2).unwrap();
    let service = service(AlertConfig {
        group,
        color: Some(186),
        ..AlertConfig::default()
    });

    run(
        &service,
        ScriptedStream::connected([NotificationEvent::ordinary(Some("WhatsApp"))]),
    )
    .await
    .unwrap();

    let bulb = service.light();
    let history = bulb.history();
    assert_eq!(history.first(), Some(&LightCommand::On(group)));
    assert!(history.contains(&LightCommand::Hue(216)));
    assert!(history.contains(&LightCommand::WhiteMode(group)));
    assert_eq!(history.last(), Some(&LightCommand::Brightness(100)));

    let state = bulb.state();
    assert!(state.powered);
    assert_eq!(state.selected, Some(group));
    assert_eq!(state.mode, ColorMode::White);
    assert_eq!(state.brightness, 100);
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn should_ignore_dismissals() {
    let service = service(AlertConfig::default());

    run(
        &service,
        ScriptedStream::connected([NotificationEvent::dismissal(), NotificationEvent::dismissal()]),
    )
    .await
    .unwrap();

    assert!(service.light().history().is_empty());
}

#[tokio::test(start_paused = true)]
async fn should_flash_once_for_a_burst_within_grace_period() {
    let service = service(AlertConfig {
        grace_period_secs: Some(60),
        ..AlertConfig::default()
    });

    run(
        &service,
        ScriptedStream::connected([
            NotificationEvent::ordinary(Some("Inbox")),
            NotificationEvent::ordinary(Some("Inbox")),
            NotificationEvent::ordinary(Some("Inbox")),
        ]),
    )
    .await
    .unwrap();

    assert_eq!(flashes(service.light()), 1);
}

#[tokio::test(start_paused = true)]
async fn should_never_fire_when_window_spans_midnight() {
    let service = service(AlertConfig {
        window: HourWindow {
            start_hour: Some(23),
            end_hour: Some(0),
        },
        ..AlertConfig::default()
    });

    run(&service, ScriptedStream::connected([NotificationEvent::ordinary(None)]))
        .await
        .unwrap();

    assert!(service.light().history().is_empty());
}

#[tokio::test(start_paused = true)]
async fn should_respect_override_file() {
    let disabled = state_file("disabled", "1\n");
    let service = service(AlertConfig {
        state_file: Some(disabled.clone()),
        ..AlertConfig::default()
    });
    run(&service, ScriptedStream::connected([NotificationEvent::ordinary(None)]))
        .await
        .unwrap();
    assert!(service.light().history().is_empty());

    std::fs::write(&disabled, "0\r\n").unwrap();
    run(&service, ScriptedStream::connected([NotificationEvent::ordinary(None)]))
        .await
        .unwrap();
    assert_eq!(flashes(service.light()), 1);

    std::fs::remove_file(disabled).unwrap();
}

#[tokio::test(start_paused = true)]
async fn should_drop_push_when_override_file_is_missing() {
    let service = service(AlertConfig {
        state_file: Some(PathBuf::from("/nonexistent/pushlightd/state")),
        ..AlertConfig::default()
    });

    let result = run(
        &service,
        ScriptedStream::connected([NotificationEvent::ordinary(None)]),
    )
    .await;

    assert!(result.is_ok());
    assert!(service.light().history().is_empty());
}

// ---------------------------------------------------------------------------
// Stream lifecycle
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn should_fail_when_stream_errors() {
    let service = service(AlertConfig::default());

    let result = run(
        &service,
        ScriptedStream::from_events([
            StreamEvent::Connected,
            StreamEvent::Error("connection reset".to_string()),
            StreamEvent::Push(NotificationEvent::ordinary(None)),
        ]),
    )
    .await;

    assert!(matches!(result, Err(AlertError::Stream(_))));
    assert!(service.light().history().is_empty());
}

#[tokio::test(start_paused = true)]
async fn should_return_cleanly_when_stream_ends_without_close() {
    let service = service(AlertConfig::default());

    let result = run(
        &service,
        ScriptedStream::from_events([StreamEvent::Connected]),
    )
    .await;

    assert!(result.is_ok());
}

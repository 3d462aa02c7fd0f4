//! # pushlight-adapter-milight
//!
//! Milight adapter — sends light commands to a legacy Milight / LimitlessLED
//! WiFi bridge.
//!
//! ## How it works
//!
//! The bridge listens for three-byte UDP frames and never acknowledges them.
//! Each frame is therefore sent several times, with a short delay after every
//! send so the bridge's radio can keep up.
//!
//! | Setting | Default |
//! |---------|---------|
//! | UDP port | `8899` |
//! | Delay between frames | `35 ms` |
//! | Repeats per command | `3` |
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `pushlight-app` and `pushlight-domain`.

mod config;
mod error;
pub mod protocol;

pub use config::MilightConfig;
pub use error::MilightError;

use std::time::Duration;

use tokio::net::UdpSocket;

use pushlight_app::ports::LightController;
use pushlight_domain::error::AlertError;
use pushlight_domain::light::LightCommand;

/// [`LightController`] backed by a UDP socket connected to the bridge.
pub struct MilightController {
    socket: UdpSocket,
    delay: Duration,
    repeat: u8,
}

impl MilightController {
    /// Open a UDP socket towards the bridge described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`MilightError::Connect`] if the socket cannot be bound or the
    /// target cannot be resolved.
    pub async fn connect(config: &MilightConfig) -> Result<Self, MilightError> {
        let target = config.target();
        let connect_err = |source| MilightError::Connect {
            target: target.clone(),
            source,
        };

        let socket = UdpSocket::bind(("0.0.0.0", 0)).await.map_err(connect_err)?;
        socket.set_broadcast(true).map_err(connect_err)?;
        socket.connect(&target).await.map_err(connect_err)?;

        tracing::info!(%target, repeat = config.command_repeat, "milight bridge ready");

        Ok(Self {
            socket,
            delay: config.delay_between_commands(),
            repeat: config.command_repeat.max(1),
        })
    }

    async fn send_frame(&self, frame: protocol::Frame) -> Result<(), MilightError> {
        for _ in 0..self.repeat {
            self.socket.send(&frame).await.map_err(MilightError::Send)?;
            tokio::time::sleep(self.delay).await;
        }
        Ok(())
    }
}

impl LightController for MilightController {
    async fn send(&self, command: LightCommand) -> Result<(), AlertError> {
        let frame = protocol::encode(command);
        tracing::trace!(%command, ?frame, "sending milight frame");
        self.send_frame(frame).await.map_err(MilightError::into_domain)
    }
}

#[cfg(test)]
mod tests {
    use pushlight_domain::light::Group;
    use pushlight_domain::sequence;

    use super::*;

    async fn receiver() -> (UdpSocket, MilightConfig) {
        let socket = UdpSocket::bind(("127.0.0.1", 0)).await.unwrap();
        let config = MilightConfig {
            host: "127.0.0.1".to_string(),
            port: socket.local_addr().unwrap().port(),
            delay_between_commands_ms: 0,
            command_repeat: 3,
        };
        (socket, config)
    }

    async fn recv_frame(socket: &UdpSocket) -> Vec<u8> {
        let mut buf = [0_u8; 16];
        let len = socket.recv(&mut buf).await.unwrap();
        buf[..len].to_vec()
    }

    #[tokio::test]
    async fn should_repeat_each_frame() {
        let (rx, config) = receiver().await;
        let controller = MilightController::connect(&config).await.unwrap();

        controller.send(LightCommand::On(Group::ALL)).await.unwrap();

        for _ in 0..3 {
            assert_eq!(recv_frame(&rx).await, vec![0x42, 0x00, 0x55]);
        }
    }

    #[tokio::test]
    async fn should_send_at_least_once_when_repeat_is_zero() {
        let (rx, mut config) = receiver().await;
        config.command_repeat = 0;
        let controller = MilightController::connect(&config).await.unwrap();

        controller.send(LightCommand::Hue(186)).await.unwrap();

        assert_eq!(recv_frame(&rx).await, vec![0x40, 186, 0x55]);
    }

    #[tokio::test]
    async fn should_play_sequence_frames_in_order() {
        let (rx, mut config) = receiver().await;
        config.command_repeat = 1;
        let controller = MilightController::connect(&config).await.unwrap();

        let seq = sequence::build(Group::new(1).unwrap(), None, None);
        controller.play(seq).await.unwrap();

        assert_eq!(recv_frame(&rx).await, vec![0x45, 0x00, 0x55]);
        assert_eq!(recv_frame(&rx).await, vec![0x4E, 7, 0x55]);
        assert_eq!(recv_frame(&rx).await, vec![0x4E, 27, 0x55]);
    }

    #[tokio::test]
    async fn should_fail_to_connect_to_unresolvable_host() {
        let config = MilightConfig {
            host: "bridge.invalid".to_string(),
            ..MilightConfig::default()
        };
        let result = MilightController::connect(&config).await;
        assert!(matches!(result, Err(MilightError::Connect { .. })));
    }
}

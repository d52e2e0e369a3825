//! # Scan Session
//!
//! The frame pump that joins a camera and a decoder.
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session Loop                                     │
//! │                                                                         │
//! │   camera frames ──► select! ──► decoder ──► miss ──► next frame         │
//! │                        │                     │                          │
//! │   stop() ──► shutdown ─┘                     └─ hit ──► emit ONE event  │
//! │                 │                                          │            │
//! │                 ▼                                          ▼            │
//! │            close camera ◄──────────────────────────── close camera      │
//! │                                                                         │
//! │   A hit ends the loop, so a payload is delivered at most once; frames   │
//! │   still in flight afterwards are never decoded.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop mirrors the shutdown pattern used across this workspace: a
//! one-slot shutdown channel raced against the work channel in `select!`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::camera::{CameraAccess, Frame};
use crate::decoder::FrameDecoder;
use crate::error::{ScanError, ScanResult};

// =============================================================================
// Events
// =============================================================================

/// What a session reports back to its consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A symbol was read off a frame. Emitted at most once per session.
    Decoded(String),
}

// =============================================================================
// Scanner
// =============================================================================

/// Session factory enforcing at most one active session.
pub struct Scanner {
    camera: Arc<dyn CameraAccess>,
    decoder: Arc<dyn FrameDecoder>,
    active: Arc<AtomicBool>,
}

impl Scanner {
    pub fn new(camera: Arc<dyn CameraAccess>, decoder: Arc<dyn FrameDecoder>) -> Self {
        Scanner {
            camera,
            decoder,
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True while a session is running.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Opens the camera and starts a session.
    ///
    /// Fails with [`ScanError::SessionActive`] while a previous session is
    /// still running, and with the camera's own error when the device cannot
    /// be opened (in which case no session starts and the scanner stays
    /// available).
    pub async fn start(&self) -> ScanResult<ScanSession> {
        if self.active.swap(true, Ordering::SeqCst) {
            return Err(ScanError::SessionActive);
        }

        let frames = match self.camera.open().await {
            Ok(frames) => frames,
            Err(e) => {
                self.active.store(false, Ordering::SeqCst);
                return Err(e.into());
            }
        };

        let (event_tx, event_rx) = mpsc::channel(1);
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let task = tokio::spawn(Self::pump(
            frames,
            Arc::clone(&self.decoder),
            Arc::clone(&self.camera),
            Arc::clone(&self.active),
            event_tx,
            shutdown_rx,
        ));

        info!("Scan session started");
        Ok(ScanSession {
            events: event_rx,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        })
    }

    /// The session loop. Runs until a hit, a stop, or the camera ending its
    /// frame stream, then releases the camera.
    async fn pump(
        mut frames: mpsc::Receiver<Frame>,
        decoder: Arc<dyn FrameDecoder>,
        camera: Arc<dyn CameraAccess>,
        active: Arc<AtomicBool>,
        event_tx: mpsc::Sender<ScanEvent>,
        mut shutdown_rx: mpsc::Receiver<()>,
    ) {
        loop {
            tokio::select! {
                maybe_frame = frames.recv() => {
                    match maybe_frame {
                        Some(frame) => {
                            if let Some(payload) = decoder.decode(&frame) {
                                debug!(payload = %payload, "Scan hit");
                                let _ = event_tx.send(ScanEvent::Decoded(payload)).await;
                                break;
                            }
                        }
                        None => {
                            debug!("Camera frame stream ended");
                            break;
                        }
                    }
                }

                _ = shutdown_rx.recv() => {
                    debug!("Scan session received stop");
                    break;
                }
            }
        }

        camera.close().await;
        active.store(false, Ordering::SeqCst);
        info!("Scan session ended");
    }
}

// =============================================================================
// Scan Session
// =============================================================================

/// A running (or finished) scan session.
///
/// Consumers await [`next_event`]; `None` means the session ended without a
/// hit (stopped, or the camera went away).
///
/// [`next_event`]: ScanSession::next_event
pub struct ScanSession {
    events: mpsc::Receiver<ScanEvent>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl ScanSession {
    /// Waits for the next session event.
    pub async fn next_event(&mut self) -> Option<ScanEvent> {
        self.events.recv().await
    }

    /// Stops the session and waits for the camera to be released.
    ///
    /// A decode racing with the stop is dropped, not delivered: once `stop`
    /// returns, [`next_event`] yields `None` even if a hit was buffered
    /// while the shutdown was in flight.
    ///
    /// Stopping a session that already ended on its own is fine; stopping
    /// twice is [`ScanError::SessionStopped`].
    ///
    /// [`next_event`]: ScanSession::next_event
    pub async fn stop(&mut self) -> ScanResult<()> {
        let Some(tx) = self.shutdown_tx.take() else {
            return Err(ScanError::SessionStopped);
        };
        // send fails when the loop already exited on its own, which is fine
        let _ = tx.send(()).await;

        if let Some(task) = self.task.take() {
            let _ = task.await;
        }

        // discard anything decoded while the stop was in flight
        self.events.close();
        while self.events.try_recv().is_ok() {}
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PermissionState;
    use crate::error::CameraError;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    /// Scripted camera: serves a fixed frame list, optionally keeping the
    /// stream open afterwards, and records whether it was released.
    struct FakeCamera {
        frames: Vec<Frame>,
        hold_open: bool,
        fail_with: Option<CameraError>,
        closed: AtomicBool,
        live_tx: Mutex<Option<mpsc::Sender<Frame>>>,
    }

    impl FakeCamera {
        fn serving(frames: Vec<Frame>, hold_open: bool) -> Self {
            FakeCamera {
                frames,
                hold_open,
                fail_with: None,
                closed: AtomicBool::new(false),
                live_tx: Mutex::new(None),
            }
        }

        fn failing(err: CameraError) -> Self {
            FakeCamera {
                frames: Vec::new(),
                hold_open: false,
                fail_with: Some(err),
                closed: AtomicBool::new(false),
                live_tx: Mutex::new(None),
            }
        }

        fn was_closed(&self) -> bool {
            self.closed.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CameraAccess for FakeCamera {
        async fn permission(&self) -> PermissionState {
            PermissionState::Granted
        }

        async fn request_permission(&self) -> Result<PermissionState, CameraError> {
            Ok(PermissionState::Granted)
        }

        async fn open(&self) -> Result<mpsc::Receiver<Frame>, CameraError> {
            if let Some(err) = self.fail_with.clone() {
                return Err(err);
            }
            let (tx, rx) = mpsc::channel(self.frames.len() + 1);
            for frame in &self.frames {
                let _ = tx.try_send(frame.clone());
            }
            if self.hold_open {
                *self.live_tx.lock().await = Some(tx);
            }
            Ok(rx)
        }

        async fn close(&self) {
            self.closed.store(true, Ordering::SeqCst);
            *self.live_tx.lock().await = None;
        }
    }

    /// Decodes frames whose first luma byte is 1.
    struct MarkerDecoder;

    impl FrameDecoder for MarkerDecoder {
        fn decode(&self, frame: &Frame) -> Option<String> {
            (frame.luma.first() == Some(&1)).then(|| "ART-123456789".to_string())
        }
    }

    fn miss_frame() -> Frame {
        Frame { luma: vec![0; 4], width: 2, height: 2 }
    }

    fn hit_frame() -> Frame {
        Frame { luma: vec![1, 0, 0, 0], width: 2, height: 2 }
    }

    #[tokio::test]
    async fn test_first_hit_is_delivered_once_and_camera_released() {
        let camera = Arc::new(FakeCamera::serving(
            vec![miss_frame(), hit_frame(), hit_frame()],
            false,
        ));
        let scanner = Scanner::new(camera.clone(), Arc::new(MarkerDecoder));

        let mut session = scanner.start().await.unwrap();
        assert_eq!(
            session.next_event().await,
            Some(ScanEvent::Decoded("ART-123456789".to_string()))
        );
        // the second hit frame was never decoded
        assert_eq!(session.next_event().await, None);

        session.stop().await.unwrap();
        assert!(camera.was_closed());
        assert!(!scanner.is_active());
    }

    #[tokio::test]
    async fn test_second_start_while_active_is_refused() {
        let camera = Arc::new(FakeCamera::serving(vec![], true));
        let scanner = Scanner::new(camera, Arc::new(MarkerDecoder));

        let mut session = scanner.start().await.unwrap();
        assert!(matches!(scanner.start().await, Err(ScanError::SessionActive)));

        session.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_scanner_is_reusable_after_stop() {
        let camera = Arc::new(FakeCamera::serving(vec![], true));
        let scanner = Scanner::new(camera, Arc::new(MarkerDecoder));

        let mut first = scanner.start().await.unwrap();
        first.stop().await.unwrap();

        let mut second = scanner.start().await.unwrap();
        second.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_stop_without_hit_emits_nothing() {
        let camera = Arc::new(FakeCamera::serving(vec![miss_frame()], true));
        let scanner = Scanner::new(camera.clone(), Arc::new(MarkerDecoder));

        let mut session = scanner.start().await.unwrap();
        session.stop().await.unwrap();

        assert_eq!(session.next_event().await, None);
        assert!(camera.was_closed());
    }

    #[tokio::test]
    async fn test_decode_racing_with_stop_is_dropped() {
        let camera = Arc::new(FakeCamera::serving(vec![hit_frame()], false));
        let scanner = Scanner::new(camera.clone(), Arc::new(MarkerDecoder));

        let mut session = scanner.start().await.unwrap();
        // let the pump decode and buffer the hit before the stop lands
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        session.stop().await.unwrap();

        assert_eq!(session.next_event().await, None);
        assert!(camera.was_closed());
        assert!(!scanner.is_active());
    }

    #[tokio::test]
    async fn test_double_stop_is_an_error() {
        let camera = Arc::new(FakeCamera::serving(vec![], true));
        let scanner = Scanner::new(camera, Arc::new(MarkerDecoder));

        let mut session = scanner.start().await.unwrap();
        session.stop().await.unwrap();
        assert!(matches!(session.stop().await, Err(ScanError::SessionStopped)));
    }

    #[tokio::test]
    async fn test_camera_failure_leaves_scanner_available() {
        let camera = Arc::new(FakeCamera::failing(CameraError::DeviceBusy));
        let scanner = Scanner::new(camera, Arc::new(MarkerDecoder));

        let err = match scanner.start().await {
            Ok(_) => panic!("expected camera failure"),
            Err(e) => e,
        };
        assert!(matches!(err, ScanError::Camera(CameraError::DeviceBusy)));
        assert!(!scanner.is_active());
    }
}

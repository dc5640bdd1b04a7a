//! A session shared between an input thread and a render thread.
//!
//! The session sits behind one mutex. The view orientation has its own lock,
//! so spinning the cube never waits on a tick and vice versa.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};

use crate::animation::ViewRotation;
use crate::error::Result;
use crate::inference::{infer_rotation, Pick};
use crate::rotation::Rotation;
use crate::session::Session;

#[derive(Debug, Clone)]
pub struct SharedSession {
    size: usize,
    session: Arc<Mutex<Session>>,
    view: Arc<Mutex<ViewRotation>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            size: session.size(),
            session: Arc::new(Mutex::new(session)),
            view: Arc::new(Mutex::new(ViewRotation::default())),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Locks the session. Keep the guard short-lived; the other thread is
    /// blocked while it is held.
    pub fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock()
    }

    /// Infers a rotation from two picks and queues it.
    ///
    /// Inference runs before the session is locked; the lock is held only to
    /// push onto the queue.
    pub fn submit_picks(&self, a: Pick, b: Pick) -> Result<Option<Rotation>> {
        let Some(rotation) = infer_rotation(self.size, a, b) else {
            return Ok(None);
        };
        self.session.lock().enqueue(rotation)?;
        Ok(Some(rotation))
    }

    pub fn enqueue(&self, rotation: Rotation) -> Result<()> {
        self.session.lock().enqueue(rotation)
    }

    pub fn tick(&self, timestamp: Duration) -> Result<bool> {
        self.session.lock().tick(timestamp)
    }

    pub fn toggle_undo_mode(&self) -> bool {
        self.session.lock().toggle_undo_mode()
    }

    pub fn view(&self) -> ViewRotation {
        *self.view.lock()
    }

    pub fn rotate_view(&self, yaw: f32, pitch: f32) {
        self.view.lock().rotate(yaw, pitch);
    }

    pub fn reset_orientation(&self) {
        self.view.lock().reset();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::geometry::{Coord, Face};
    use crate::grid::CubeState;
    use crate::session::SessionConfig;

    fn shared(size: usize) -> SharedSession {
        SharedSession::new(
            Session::new(SessionConfig {
                size,
                step_count: 3,
            })
            .unwrap(),
        )
    }

    #[test]
    fn test_submit_picks() {
        let shared = shared(3);
        let up = |left| Pick::new(Coord::new(left, 0, 0), Face::Up);

        assert_eq!(shared.submit_picks(up(0), up(0)).unwrap(), None);
        assert_eq!(shared.lock().queued(), 0);

        let rotation = shared.submit_picks(up(0), up(1)).unwrap();
        assert!(rotation.is_some());
        assert_eq!(shared.lock().queued(), 1);
    }

    #[test]
    fn test_view_is_independent_of_session() {
        let shared = shared(2);
        shared.rotate_view(0.5, 0.25);
        assert_eq!(shared.view().pitch, 0.25);

        // holding the session lock does not block the view
        let guard = shared.lock();
        shared.reset_orientation();
        assert_eq!(shared.view(), ViewRotation::default());
        drop(guard);
    }

    #[test_log::test]
    fn test_input_and_render_threads() {
        let shared = shared(3);
        let done = AtomicBool::new(false);
        let picks = [
            (Pick::new(Coord::new(0, 0, 0), Face::Up), Pick::new(Coord::new(1, 0, 0), Face::Up)),
            (Pick::new(Coord::new(2, 0, 0), Face::Front), Pick::new(Coord::new(2, 0, 0), Face::Right)),
            (Pick::new(Coord::new(0, 1, 0), Face::Left), Pick::new(Coord::new(0, 1, 1), Face::Left)),
        ];

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for _ in 0..10 {
                    for (a, b) in picks {
                        shared.submit_picks(a, b).unwrap();
                    }
                }
                done.store(true, Ordering::Release);
            });
            scope.spawn(|| {
                let mut frame = 0;
                loop {
                    let finished = done.load(Ordering::Acquire);
                    let redraw = shared.tick(Duration::from_millis(frame)).unwrap();
                    frame += 16;
                    if finished && !redraw {
                        break;
                    }
                    let session = shared.lock();
                    let solved = CubeState::solved(3).unwrap();
                    assert_eq!(session.state().sticker_counts(), solved.sticker_counts());
                }
            });
        });

        let mut session = shared.lock();
        assert!(session.is_settled());
        assert_eq!(session.undo_depth(), 30);

        session.toggle_undo_mode();
        let mut frame = 0;
        while session.tick(Duration::from_millis(frame)).unwrap() {
            frame += 16;
        }
        assert_eq!(session.state(), &CubeState::solved(3).unwrap());
    }
}

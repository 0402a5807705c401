use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;
use uuid::Uuid;

use super::{TickScheduler, TickSource};
use crate::util::io::event::Event;

/// Emits `Event::PanelTick` into the UI event channel on a tokio interval.
///
/// The first tick fires one full interval after arming.
#[derive(Debug, Clone)]
pub struct TokioTickScheduler {
    sender: mpsc::UnboundedSender<Event>,
    instance: Uuid,
}

impl TokioTickScheduler {
    pub fn new(sender: mpsc::UnboundedSender<Event>, instance: Uuid) -> Self {
        Self { sender, instance }
    }
}

impl TickScheduler for TokioTickScheduler {
    fn arm(&mut self, period: Duration, generation: u64) -> TickSource {
        let sender = self.sender.clone();
        let instance = self.instance;

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if sender.send(Event::PanelTick { instance, generation }).is_err() {
                    break;
                }
            }
        });

        debug!("Armed tick task for {} (generation {})", instance, generation);
        TickSource::new(generation, period, Some(task.abort_handle()))
    }

    fn cancel(&mut self, source: TickSource) {
        debug!("Cancelling tick task for {} (generation {})", self.instance, source.generation());
        source.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::timer::TimerController;

    fn drain(rx: &mut mpsc::UnboundedReceiver<Event>) -> Vec<u64> {
        let mut generations = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let Event::PanelTick { generation, .. } = event {
                generations.push(generation);
            }
        }
        generations
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_arrive_at_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TimerController::new(
            Box::new(TokioTickScheduler::new(tx, Uuid::new_v4())),
            Duration::from_millis(1500),
        );
        timer.start(None);

        tokio::time::sleep(Duration::from_millis(1400)).await;
        assert!(drain(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_millis(3200)).await;
        assert_eq!(drain(&mut rx), vec![1, 1, 1]);
        timer.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_silences_source() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TimerController::new(
            Box::new(TokioTickScheduler::new(tx, Uuid::new_v4())),
            Duration::from_millis(500),
        );
        timer.start(None);
        tokio::time::sleep(Duration::from_millis(1200)).await;
        timer.stop();
        drain(&mut rx);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_only_emits_new_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TimerController::new(
            Box::new(TokioTickScheduler::new(tx, Uuid::new_v4())),
            Duration::from_millis(1000),
        );
        timer.start(None);
        timer.stop();
        timer.start(None);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        let generations = drain(&mut rx);
        assert_eq!(generations.len(), 3);
        assert!(generations.iter().all(|&g| g == 2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_controller_aborts_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TimerController::new(
            Box::new(TokioTickScheduler::new(tx, Uuid::new_v4())),
            Duration::from_millis(500),
        );
        timer.start(None);
        tokio::time::sleep(Duration::from_millis(700)).await;
        drop(timer);
        assert_eq!(drain(&mut rx), vec![1]);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(drain(&mut rx).is_empty());
    }
}

//! Cancelable, timer-driven reveal queue.
//!
//! A screen transition builds an ordered list of [`RevealItem`]s, each a
//! content producer plus a fixed millisecond offset. [`RevealScheduler::play`]
//! arms one independent single-shot timer task per item; when a timer fires
//! it materializes the content, appends it to the [`RenderSink`], and marks
//! it visible after a short settle interval. [`RevealScheduler::cancel_all`]
//! synchronously invalidates every timer that has not fired yet.
//!
//! The scheduler never reorders: callers supply cumulative delays (see
//! [`RevealSequence`]), and two items with equal delays have no guaranteed
//! relative order, so the sequence builder inserts a strictly increasing
//! epsilon where append order matters.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::types::stats::{MonthlyStats, TallyStats, TimeOfDayStats, TopDishesStats, WeekdayStats};

/// Fixed settle interval between appending content and marking it visible
/// (the fade-in convention).
pub const SETTLE: Duration = Duration::from_millis(50);

/// Chart payload of a supplementary chart reveal, keyed off the same
/// statistic bundle the screen's text reveals were built from.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    /// Weekday bar chart.
    Weekday(WeekdayStats),
    /// Top-5 ranking chart.
    Dishes(TopDishesStats),
    /// Tally comparison chart.
    Tallies(TallyStats),
    /// Time-bucket distribution chart.
    TimeOfDay(TimeOfDayStats),
    /// Meals-per-month chart.
    Monthly(MonthlyStats),
}

/// Data-only description of one piece of presented content. How it is
/// painted is the render sink's business.
#[derive(Debug, Clone, PartialEq)]
pub enum RevealContent {
    /// Large heading.
    Title(String),
    /// Body text.
    Text(String),
    /// Highlighted value (dish name, time bucket, ...).
    Emphasis(String),
    /// Oversized emoji callout.
    Emoji(String),
    /// Small secondary note.
    Note(String),
    /// Visual separator between blocks.
    Separator,
    /// Interactive button picking the named user.
    UserButton(String),
    /// Interactive button restarting the slideshow.
    RestartButton,
    /// Supplementary chart.
    Chart(ChartSpec),
}

/// Identifier a sink assigns to appended content, used for the mark-visible
/// follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId(pub u64);

impl fmt::Display for RevealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reveal#{}", self.0)
    }
}

/// External rendering collaborator. The engine only knows that content can
/// be appended in call order, later marked visible, and cleared wholesale.
pub trait RenderSink: Send + Sync {
    /// Append content; returns the id for the mark-visible follow-up.
    fn append(&self, content: RevealContent) -> RevealId;
    /// Mark previously appended content visible. Unknown ids (content
    /// cleared in the meantime) are a no-op.
    fn show(&self, id: RevealId);
    /// Remove all presented content.
    fn clear(&self);
    /// Reset scroll position to the top.
    fn reset_scroll(&self);
}

/// One scheduled content-append-and-show operation.
pub struct RevealItem {
    producer: Box<dyn FnOnce() -> RevealContent + Send + 'static>,
    delay: Duration,
}

impl RevealItem {
    /// Item whose content is materialized when the timer fires.
    pub fn new(
        delay: Duration,
        producer: impl FnOnce() -> RevealContent + Send + 'static,
    ) -> Self {
        Self {
            producer: Box::new(producer),
            delay,
        }
    }

    /// Item with pre-built content.
    pub fn content(delay: Duration, content: RevealContent) -> Self {
        Self::new(delay, move || content)
    }

    /// Offset from `play()` at which this item fires.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Consume the item and materialize its content (for inspection in
    /// tests; the scheduler does this when the timer fires).
    #[cfg(test)]
    pub(crate) fn fire(self) -> RevealContent {
        (self.producer)()
    }
}

impl fmt::Debug for RevealItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealItem")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// Cumulative-delay builder for a screen's reveal sequence.
///
/// `push` schedules content at the current cursor and then advances it by
/// the given gap. A zero gap still advances the cursor by 1 ms so that
/// append order is preserved (equal-delay timers have no ordering
/// guarantee).
#[derive(Debug, Default)]
pub struct RevealSequence {
    items: Vec<RevealItem>,
    cursor: Duration,
}

impl RevealSequence {
    /// Empty sequence starting at offset zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `content` at the current cursor, then advance by `gap_ms`.
    pub fn push(&mut self, content: RevealContent, gap_ms: u64) -> &mut Self {
        self.items
            .push(RevealItem::content(self.cursor, content));
        let gap = gap_ms.max(1);
        self.cursor += Duration::from_millis(gap);
        self
    }

    /// Current cursor offset (where the next push lands).
    pub fn cursor(&self) -> Duration {
        self.cursor
    }

    /// Finished item list, in push order with non-decreasing delays.
    pub fn into_items(self) -> Vec<RevealItem> {
        self.items
    }
}

/// FIFO queue of reveal items played out over wall-clock delays.
pub struct RevealScheduler {
    sink: Arc<dyn RenderSink>,
    queue: Vec<RevealItem>,
    armed: Vec<JoinHandle<()>>,
    started_at: Option<Instant>,
}

impl RevealScheduler {
    /// Scheduler feeding the given sink.
    pub fn new(sink: Arc<dyn RenderSink>) -> Self {
        Self {
            sink,
            queue: Vec::new(),
            armed: Vec::new(),
            started_at: None,
        }
    }

    /// Append an item. Before `play()` it just queues; afterwards a timer
    /// is armed immediately at the item's offset from the original `play()`
    /// instant.
    pub fn enqueue(&mut self, item: RevealItem) {
        match self.started_at {
            Some(start) => {
                let handle = arm(Arc::clone(&self.sink), start, item);
                self.armed.push(handle);
            }
            None => self.queue.push(item),
        }
    }

    /// Arm one independent timer per queued item, offset from now.
    pub fn play(&mut self) {
        let start = Instant::now();
        self.started_at = Some(start);
        debug!(items = self.queue.len(), "reveal playback started");
        for item in self.queue.drain(..) {
            let handle = arm(Arc::clone(&self.sink), start, item);
            self.armed.push(handle);
        }
    }

    /// Synchronously invalidate every armed timer that has not fired.
    /// Already-fired items are unaffected; the queue is fully drained.
    pub fn cancel_all(&mut self) {
        let armed = self.armed.len();
        for handle in self.armed.drain(..) {
            handle.abort();
        }
        if armed > 0 || !self.queue.is_empty() {
            debug!(armed, queued = self.queue.len(), "reveals canceled");
        }
        self.queue.clear();
        self.started_at = None;
    }

    /// Whether `play()` has been called since the last `cancel_all()`.
    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    /// Items queued but not yet armed.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Drop for RevealScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

fn arm(sink: Arc<dyn RenderSink>, start: Instant, item: RevealItem) -> JoinHandle<()> {
    let at = start + item.delay;
    tokio::spawn(async move {
        tokio::time::sleep_until(at).await;
        let content = (item.producer)();
        let id = sink.append(content);
        // The settle follow-up is detached: an item that has fired is past
        // cancellation, and a late `show` on cleared content is a sink no-op.
        tokio::spawn(async move {
            tokio::time::sleep(SETTLE).await;
            sink.show(id);
        });
    })
}

/// In-memory render sink: records appends, visibility transitions, and
/// clears. Useful as a reference sink and for tests.
#[derive(Default)]
pub struct MemorySink {
    inner: Mutex<MemorySinkState>,
}

/// One appended entry in a [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct SinkEntry {
    /// Assigned id.
    pub id: RevealId,
    /// The appended content.
    pub content: RevealContent,
    /// Whether the mark-visible follow-up has run.
    pub visible: bool,
}

#[derive(Debug, Default)]
struct MemorySinkState {
    next_id: u64,
    entries: Vec<SinkEntry>,
    clears: u64,
    scroll_resets: u64,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current entries in append order.
    pub fn entries(&self) -> Vec<SinkEntry> {
        self.inner.lock().entries.clone()
    }

    /// Number of entries currently presented.
    pub fn appended(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Number of currently visible entries.
    pub fn visible(&self) -> usize {
        self.inner.lock().entries.iter().filter(|e| e.visible).count()
    }

    /// How many times the sink was cleared.
    pub fn clears(&self) -> u64 {
        self.inner.lock().clears
    }

    /// How many times the scroll position was reset.
    pub fn scroll_resets(&self) -> u64 {
        self.inner.lock().scroll_resets
    }
}

impl RenderSink for MemorySink {
    fn append(&self, content: RevealContent) -> RevealId {
        let mut state = self.inner.lock();
        let id = RevealId(state.next_id);
        state.next_id += 1;
        state.entries.push(SinkEntry {
            id,
            content,
            visible: false,
        });
        id
    }

    fn show(&self, id: RevealId) {
        let mut state = self.inner.lock();
        if let Some(entry) = state.entries.iter_mut().find(|e| e.id == id) {
            entry.visible = true;
        }
    }

    fn clear(&self) {
        let mut state = self.inner.lock();
        state.entries.clear();
        state.clears += 1;
    }

    fn reset_scroll(&self) {
        self.inner.lock().scroll_resets += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_item(delay_ms: u64, text: &str) -> RevealItem {
        RevealItem::content(
            Duration::from_millis(delay_ms),
            RevealContent::Text(text.to_string()),
        )
    }

    #[test]
    fn test_sequence_accumulates_delays() {
        let mut seq = RevealSequence::new();
        seq.push(RevealContent::Title("t".into()), 800);
        seq.push(RevealContent::Text("a".into()), 1500);
        seq.push(RevealContent::Text("b".into()), 0);
        seq.push(RevealContent::Emoji("🎉".into()), 1000);

        let items = seq.into_items();
        let delays: Vec<u64> = items.iter().map(|i| i.delay().as_millis() as u64).collect();
        // Zero gap still advances by the 1 ms epsilon.
        assert_eq!(delays, vec![0, 800, 2300, 2301]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_items_fire_in_delay_order() {
        let sink = Arc::new(MemorySink::new());
        let mut scheduler = RevealScheduler::new(sink.clone());
        scheduler.enqueue(text_item(100, "first"));
        scheduler.enqueue(text_item(300, "second"));
        scheduler.play();

        tokio::time::sleep(Duration::from_millis(500)).await;

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].content, RevealContent::Text("first".into()));
        assert_eq!(entries[1].content, RevealContent::Text("second".into()));
        assert_eq!(sink.visible(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_interval_precedes_show() {
        let sink = Arc::new(MemorySink::new());
        let mut scheduler = RevealScheduler::new(sink.clone());
        scheduler.enqueue(text_item(100, "x"));
        scheduler.play();

        // Past the item delay, short of the settle interval.
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(sink.appended(), 1);
        assert_eq!(sink.visible(), 0);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(sink.visible(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_drops_unfired_items() {
        let sink = Arc::new(MemorySink::new());
        let mut scheduler = RevealScheduler::new(sink.clone());
        scheduler.enqueue(text_item(0, "a"));
        scheduler.enqueue(text_item(1000, "b"));
        scheduler.enqueue(text_item(2000, "c"));
        scheduler.play();

        tokio::time::sleep(Duration::from_millis(500)).await;
        scheduler.cancel_all();
        tokio::time::sleep(Duration::from_millis(3000)).await;

        // Only the first item ever reached the sink; the canceled ones stay
        // dropped even after their original delays elapse.
        assert_eq!(sink.appended(), 1);
        assert_eq!(sink.entries()[0].content, RevealContent::Text("a".into()));
        assert_eq!(sink.visible(), 1);
        assert!(!scheduler.is_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_enqueue_after_play_arms_immediately() {
        let sink = Arc::new(MemorySink::new());
        let mut scheduler = RevealScheduler::new(sink.clone());
        scheduler.enqueue(text_item(100, "early"));
        scheduler.play();

        tokio::time::sleep(Duration::from_millis(200)).await;
        // Offset is still relative to the original play() instant.
        scheduler.enqueue(text_item(400, "late"));
        assert_eq!(scheduler.pending(), 0);

        tokio::time::sleep(Duration::from_millis(300)).await;
        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].content, RevealContent::Text("late".into()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_after_clear_is_noop() {
        let sink = MemorySink::new();
        let id = sink.append(RevealContent::Text("x".into()));
        sink.clear();
        sink.show(id);
        assert_eq!(sink.appended(), 0);
        assert_eq!(sink.clears(), 1);
    }
}

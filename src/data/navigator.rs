use chrono::NaiveDateTime;

use super::schedule::ScheduleIndex;
use super::week::{GroupedWeek, Navigability, WeekStart, WeekWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    Prev,
    Next,
    /// Back to the week containing today. Always allowed.
    Today,
}

/// Which week is on screen, as a signed number of weeks away from today's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigatorState {
    pub week_offset: i64,
}

impl NavigatorState {
    pub fn at_offset(week_offset: i64) -> Self {
        Self { week_offset }
    }

    /// The state after `command`. Paging in a direction that `nav` reports as
    /// closed leaves the state untouched.
    pub fn apply(self, command: PageCommand, nav: Navigability) -> Self {
        match command {
            PageCommand::Prev if nav.can_go_prev => Self::at_offset(self.week_offset - 1),
            PageCommand::Next if nav.can_go_next => Self::at_offset(self.week_offset + 1),
            PageCommand::Today => Self::default(),
            _ => self,
        }
    }
}

/// Everything the screen needs to draw one week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekView<'a> {
    pub week_offset: i64,
    pub week: GroupedWeek<'a>,
    pub nav: Navigability,
}

impl WeekView<'_> {
    pub fn window(&self) -> WeekWindow {
        self.week.window
    }
}

pub fn view<'a>(
    index: &'a ScheduleIndex,
    state: NavigatorState,
    now: NaiveDateTime,
    week_start: WeekStart,
) -> WeekView<'a> {
    let window = WeekWindow::at_offset(now, state.week_offset, week_start);
    let week = GroupedWeek::build(index, window);
    let nav = Navigability::of(index, &week);
    WeekView {
        week_offset: state.week_offset,
        week,
        nav,
    }
}

pub fn step(
    index: &ScheduleIndex,
    state: NavigatorState,
    command: PageCommand,
    now: NaiveDateTime,
    week_start: WeekStart,
) -> NavigatorState {
    let nav = view(index, state, now, week_start).nav;
    let next = state.apply(command, nav);
    if next == state && command != PageCommand::Today {
        tracing::debug!(?command, offset = state.week_offset, "page command ignored");
    }
    next
}

/// Owns the schedule and the current offset for one browsing session.
#[derive(Debug, Clone)]
pub struct WeekNavigator {
    index: ScheduleIndex,
    week_start: WeekStart,
    state: NavigatorState,
}

impl WeekNavigator {
    pub fn new(index: ScheduleIndex, week_start: WeekStart, state: NavigatorState) -> Self {
        Self {
            index,
            week_start,
            state,
        }
    }

    pub fn week_offset(&self) -> i64 {
        self.state.week_offset
    }

    pub fn current_view(&self, now: NaiveDateTime) -> WeekView<'_> {
        view(&self.index, self.state, now, self.week_start)
    }

    /// Each paging method returns whether the offset changed.
    pub fn apply(&mut self, command: PageCommand, now: NaiveDateTime) -> bool {
        match command {
            PageCommand::Prev => self.page_prev(now),
            PageCommand::Next => self.page_next(now),
            PageCommand::Today => self.advance(PageCommand::Today, now),
        }
    }

    pub fn page_prev(&mut self, now: NaiveDateTime) -> bool {
        self.advance(PageCommand::Prev, now)
    }

    pub fn page_next(&mut self, now: NaiveDateTime) -> bool {
        self.advance(PageCommand::Next, now)
    }

    fn advance(&mut self, command: PageCommand, now: NaiveDateTime) -> bool {
        let next = step(&self.index, self.state, command, now, self.week_start);
        let moved = next != self.state;
        self.state = next;
        moved
    }
}

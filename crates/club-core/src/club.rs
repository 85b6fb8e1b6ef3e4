//! The club state machine.
//!
//! Applies client events one at a time and records everything that happens
//! in an append-only log.
//!
//! # Rules Summary
//!
//! 1. Every input event is echoed to the log before it is applied
//! 2. A rejected event appends one error entry and changes nothing else
//! 3. Freeing a table bills each started hour and, unless it happens
//!    exactly at closing time, hands the table to the head of the queue
//! 4. At closing time all tables are freed and every remaining client is
//!    sent away, in identifier order

use std::collections::{BTreeMap, VecDeque};

use crate::config::ClubConfig;
use crate::error::ClubError;
use crate::event::{Event, EventKind};
use crate::log::LogEntry;
use crate::report::TableReport;
use crate::time::{ClockTime, MINUTES_PER_HOUR};
use crate::types::ClientId;

/// Where a client inside the club currently is.
///
/// Clients who are not inside have no entry at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClientState {
    /// Inside, neither seated nor waiting.
    Idle,
    /// Seated at the table with this index.
    Seated(usize),
    /// In the waiting queue.
    Queued,
}

/// A single table and its running totals.
#[derive(Debug, Clone)]
struct Table {
    number: u32,
    occupant: Option<ClientId>,
    /// Start of the current occupancy; meaningless while free.
    started_at: ClockTime,
    occupied_minutes: u32,
    revenue: u64,
}

impl Table {
    const fn new(number: u32) -> Self {
        Self {
            number,
            occupant: None,
            started_at: ClockTime::MIDNIGHT,
            occupied_minutes: 0,
            revenue: 0,
        }
    }

    const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Hours billed for a stay: every started hour counts in full.
fn billable_hours(minutes: u32) -> u64 {
    u64::from(minutes.div_ceil(u32::from(MINUTES_PER_HOUR)))
}

/// A computer club over a single simulated day.
#[derive(Debug, Clone)]
pub struct Club {
    config: ClubConfig,
    tables: Vec<Table>,
    /// Clients inside the club, ordered by identifier.
    clients: BTreeMap<ClientId, ClientState>,
    /// Waiting order. Holds exactly the clients tagged `Queued`.
    queue: VecDeque<ClientId>,
    log: Vec<LogEntry>,
}

impl Club {
    /// Opens a club with every table free and nobody inside.
    pub fn new(config: ClubConfig) -> Self {
        Self {
            config,
            tables: (1..=config.tables()).map(Table::new).collect(),
            clients: BTreeMap::new(),
            queue: VecDeque::new(),
            log: Vec::new(),
        }
    }

    pub const fn config(&self) -> &ClubConfig {
        &self.config
    }

    /// Applies one input event.
    ///
    /// The event line is always logged. A business-rule violation is logged
    /// as an error entry and leaves the club untouched.
    pub fn process_event(&mut self, event: &Event) {
        self.log.push(LogEntry::Input {
            line: event.line().to_string(),
        });

        let time = event.time;
        let result = match &event.kind {
            EventKind::Arrival { client } => self.arrive(time, client),
            EventKind::Sit { client, table } => self.sit(time, client, *table),
            EventKind::Wait { client } => self.wait(time, client),
            EventKind::Leave { client } => self.leave(time, client),
        };

        if let Err(error) = result {
            tracing::debug!(%time, client = %event.kind.client(), %error, "event rejected");
            self.log.push(LogEntry::Error { time, error });
        }
    }

    /// Closes the day: frees every table and sends everyone home.
    ///
    /// Tables are billed up to closing time and nobody is seated from the
    /// queue. Remaining clients leave in identifier order.
    pub fn end_of_day(&mut self) {
        let close = self.config.close();

        for index in 0..self.tables.len() {
            if self.tables[index].is_occupied() {
                self.free(index, close);
            }
        }

        self.queue.clear();
        let remaining = std::mem::take(&mut self.clients);
        tracing::debug!(%close, remaining = remaining.len(), "closing club");
        for client in remaining.into_keys() {
            self.log.push(LogEntry::ForcedDeparture {
                time: close,
                client,
            });
        }
    }

    /// The log entries recorded so far.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// The log rendered as output lines.
    pub fn output(&self) -> Vec<String> {
        self.log.iter().map(ToString::to_string).collect()
    }

    /// Per-table totals, in table order.
    pub fn report(&self) -> Vec<TableReport> {
        self.tables
            .iter()
            .map(|table| TableReport {
                table: table.number,
                revenue: table.revenue,
                occupied_minutes: table.occupied_minutes,
            })
            .collect()
    }

    /// Whether the client is currently inside the club.
    pub fn is_inside(&self, client: &ClientId) -> bool {
        self.clients.contains_key(client)
    }

    /// The table number the client occupies, if seated.
    pub fn table_of(&self, client: &ClientId) -> Option<u32> {
        match self.clients.get(client)? {
            ClientState::Seated(index) => Some(self.tables[*index].number),
            ClientState::Idle | ClientState::Queued => None,
        }
    }

    /// Clients waiting for a table, head first.
    pub fn waiting(&self) -> impl Iterator<Item = &ClientId> {
        self.queue.iter()
    }

    fn arrive(&mut self, time: ClockTime, client: &ClientId) -> Result<(), ClubError> {
        if !self.config.is_open_at(time) {
            return Err(ClubError::NotOpenYet);
        }
        if self.clients.contains_key(client) {
            return Err(ClubError::AlreadyInClub);
        }

        tracing::debug!(%time, %client, "client arrived");
        self.clients.insert(client.clone(), ClientState::Idle);
        Ok(())
    }

    fn sit(&mut self, time: ClockTime, client: &ClientId, table: i64) -> Result<(), ClubError> {
        let state = *self.clients.get(client).ok_or(ClubError::ClientUnknown)?;
        let index = self
            .table_index(table)
            .ok_or(ClubError::InvalidTableNumber)?;
        if self.tables[index].is_occupied() {
            return Err(ClubError::PlaceIsBusy);
        }

        match state {
            ClientState::Seated(current) => self.free(current, time),
            ClientState::Queued => self.dequeue(client),
            ClientState::Idle => {}
        }
        self.seat(index, client.clone(), time);
        Ok(())
    }

    fn wait(&mut self, time: ClockTime, client: &ClientId) -> Result<(), ClubError> {
        let state = *self.clients.get(client).ok_or(ClubError::ClientUnknown)?;
        if self.tables.iter().any(|table| !table.is_occupied()) {
            return Err(ClubError::CanWaitNoLonger);
        }

        // Already queued: nothing to do. Seated: keeps the table.
        if state != ClientState::Idle {
            return Ok(());
        }

        self.enqueue(client.clone());
        if self.queue.len() > self.tables.len() {
            tracing::debug!(%time, %client, "queue full, client sent away");
            self.dequeue(client);
            self.clients.remove(client);
            self.log.push(LogEntry::ForcedDeparture {
                time,
                client: client.clone(),
            });
        }
        Ok(())
    }

    fn leave(&mut self, time: ClockTime, client: &ClientId) -> Result<(), ClubError> {
        let state = *self.clients.get(client).ok_or(ClubError::ClientUnknown)?;

        match state {
            ClientState::Seated(index) => self.free(index, time),
            ClientState::Queued => self.dequeue(client),
            ClientState::Idle => {}
        }

        tracing::debug!(%time, %client, "client left");
        self.clients.remove(client);
        Ok(())
    }

    /// Maps a table number from input to an index, if the table exists.
    fn table_index(&self, table: i64) -> Option<usize> {
        usize::try_from(table)
            .ok()?
            .checked_sub(1)
            .filter(|&index| index < self.tables.len())
    }

    fn seat(&mut self, index: usize, client: ClientId, time: ClockTime) {
        let table = &mut self.tables[index];
        tracing::debug!(%time, %client, table = table.number, "client seated");
        table.occupant = Some(client.clone());
        table.started_at = time;
        self.clients.insert(client, ClientState::Seated(index));
    }

    /// Bills and frees an occupied table, then offers it to the queue.
    ///
    /// The previous occupant stays inside the club as an idle client.
    fn free(&mut self, index: usize, time: ClockTime) {
        let hourly_cost = self.config.hourly_cost();
        let table = &mut self.tables[index];
        let Some(occupant) = table.occupant.take() else {
            return;
        };

        let minutes = time.minutes_since(table.started_at);
        let revenue = billable_hours(minutes).saturating_mul(hourly_cost);
        table.occupied_minutes = table.occupied_minutes.saturating_add(minutes);
        table.revenue = table.revenue.saturating_add(revenue);
        let number = table.number;
        tracing::debug!(%time, client = %occupant, table = number, minutes, revenue, "table freed");

        if let Some(state) = self.clients.get_mut(&occupant) {
            *state = ClientState::Idle;
        }

        // Tables freed by the closing sweep are not handed over.
        if time == self.config.close() {
            return;
        }
        if let Some(next) = self.queue.pop_front() {
            self.seat(index, next.clone(), time);
            self.log.push(LogEntry::AutoSeated {
                time,
                client: next,
                table: number,
            });
        }
    }

    fn enqueue(&mut self, client: ClientId) {
        self.queue.push_back(client.clone());
        self.clients.insert(client, ClientState::Queued);
    }

    fn dequeue(&mut self, client: &ClientId) {
        self.queue.retain(|queued| queued != client);
        if let Some(state) = self
            .clients
            .get_mut(client)
            .filter(|state| **state == ClientState::Queued)
        {
            *state = ClientState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn hm(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn id(name: &str) -> ClientId {
        ClientId::new(name).unwrap()
    }

    fn club(tables: u32) -> Club {
        Club::new(ClubConfig::new(tables, hm("09:00"), hm("19:00"), 10).unwrap())
    }

    fn arrive(time: &str, client: &str) -> Event {
        Event::new(hm(time), EventKind::Arrival { client: id(client) })
    }

    fn sit(time: &str, client: &str, table: i64) -> Event {
        Event::new(
            hm(time),
            EventKind::Sit {
                client: id(client),
                table,
            },
        )
    }

    fn wait(time: &str, client: &str) -> Event {
        Event::new(hm(time), EventKind::Wait { client: id(client) })
    }

    fn leave(time: &str, client: &str) -> Event {
        Event::new(hm(time), EventKind::Leave { client: id(client) })
    }

    fn run(club: &mut Club, events: &[Event]) {
        for event in events {
            club.process_event(event);
        }
    }

    fn report_lines(club: &Club) -> Vec<String> {
        club.report().iter().map(ToString::to_string).collect()
    }

    /// Seated clients and occupied tables must always mirror each other.
    fn assert_seating_consistent(club: &Club) {
        let occupied = club.tables.iter().filter(|t| t.is_occupied()).count();
        let seated = club
            .clients
            .values()
            .filter(|state| matches!(state, ClientState::Seated(_)))
            .count();
        assert_eq!(occupied, seated);

        for (client, state) in &club.clients {
            if let ClientState::Seated(index) = state {
                assert_eq!(club.tables[*index].occupant.as_ref(), Some(client));
            }
            assert_eq!(
                club.queue.contains(client),
                *state == ClientState::Queued,
                "queue and tag disagree for {client}"
            );
        }
        assert!(club.queue.len() <= club.tables.len());
    }

    #[test]
    fn billable_hours_rounds_up() {
        assert_eq!(billable_hours(0), 0);
        assert_eq!(billable_hours(1), 1);
        assert_eq!(billable_hours(55), 1);
        assert_eq!(billable_hours(60), 1);
        assert_eq!(billable_hours(61), 2);
    }

    #[test]
    fn arrival_before_opening_is_rejected() {
        let mut club = club(3);
        club.process_event(&arrive("08:50", "client1"));

        assert_eq!(club.output(), ["08:50 1 client1", "08:50 13 NotOpenYet"]);
        assert!(!club.is_inside(&id("client1")));
    }

    #[test]
    fn arrival_after_closing_is_rejected() {
        let mut club = club(3);
        club.process_event(&arrive("19:00", "early"));
        club.process_event(&arrive("19:01", "late"));

        assert_eq!(
            club.output(),
            ["19:00 1 early", "19:01 1 late", "19:01 13 NotOpenYet"]
        );
    }

    #[test]
    fn second_arrival_is_rejected() {
        let mut club = club(3);
        run(
            &mut club,
            &[arrive("09:10", "client1"), arrive("09:20", "client1")],
        );

        assert_eq!(
            club.output(),
            [
                "09:10 1 client1",
                "09:20 1 client1",
                "09:20 13 YouShallNotPass"
            ]
        );
    }

    #[test]
    fn unknown_client_cannot_act() {
        let mut club = club(3);
        run(
            &mut club,
            &[
                sit("10:00", "ghost", 1),
                wait("10:01", "ghost"),
                leave("10:02", "ghost"),
            ],
        );

        assert_eq!(
            club.output(),
            [
                "10:00 2 ghost 1",
                "10:00 13 ClientUnknown",
                "10:01 3 ghost",
                "10:01 13 ClientUnknown",
                "10:02 4 ghost",
                "10:02 13 ClientUnknown",
            ]
        );
    }

    #[test]
    fn sit_rejects_missing_tables() {
        let mut club = club(3);
        run(
            &mut club,
            &[
                arrive("10:00", "client1"),
                sit("10:01", "client1", 0),
                sit("10:02", "client1", 4),
                sit("10:03", "client1", -1),
            ],
        );

        let errors: Vec<_> = club
            .output()
            .into_iter()
            .filter(|line| line.contains(" 13 "))
            .collect();
        assert_eq!(
            errors,
            [
                "10:01 13 InvalidTableNumber",
                "10:02 13 InvalidTableNumber",
                "10:03 13 InvalidTableNumber",
            ]
        );
        assert_eq!(club.table_of(&id("client1")), None);
    }

    #[test]
    fn sit_at_busy_table_is_rejected() {
        let mut club = club(3);
        run(
            &mut club,
            &[
                arrive("10:00", "client1"),
                sit("10:05", "client1", 1),
                arrive("10:10", "client2"),
                sit("10:15", "client2", 1),
            ],
        );

        assert_eq!(
            club.output(),
            [
                "10:00 1 client1",
                "10:05 2 client1 1",
                "10:10 1 client2",
                "10:15 2 client2 1",
                "10:15 13 PlaceIsBusy",
            ]
        );
        assert_eq!(club.table_of(&id("client1")), Some(1));
        assert_eq!(club.table_of(&id("client2")), None);
    }

    #[test]
    fn sitting_at_own_table_is_busy() {
        let mut club = club(3);
        run(
            &mut club,
            &[
                arrive("10:00", "client1"),
                sit("10:05", "client1", 1),
                sit("10:30", "client1", 1),
            ],
        );

        assert_eq!(club.output().last().unwrap(), "10:30 13 PlaceIsBusy");
        club.end_of_day();
        // One uninterrupted stay from 10:05.
        assert_eq!(report_lines(&club)[0], "1 90 08:55");
    }

    #[test]
    fn changing_tables_bills_the_first_stay() {
        let mut club = club(3);
        run(
            &mut club,
            &[
                arrive("10:00", "client1"),
                sit("10:05", "client1", 1),
                sit("11:00", "client1", 2),
            ],
        );
        assert_seating_consistent(&club);
        assert_eq!(club.table_of(&id("client1")), Some(2));

        club.end_of_day();

        assert_eq!(
            club.output(),
            [
                "10:00 1 client1",
                "10:05 2 client1 1",
                "11:00 2 client1 2",
                "19:00 11 client1",
            ]
        );
        assert_eq!(report_lines(&club), ["1 10 00:55", "2 80 08:00", "3 0 00:00"]);
    }

    #[test]
    fn freed_tables_go_to_queue_in_order() {
        let mut club = club(2);
        run(
            &mut club,
            &[
                arrive("10:00", "a"),
                arrive("10:00", "b"),
                arrive("10:00", "c"),
                arrive("10:00", "d"),
                sit("10:01", "a", 1),
                sit("10:01", "b", 2),
                wait("10:02", "c"),
                wait("10:03", "d"),
                leave("10:30", "b"),
                leave("10:50", "a"),
            ],
        );

        let output = club.output();
        assert_eq!(
            &output[output.len() - 4..],
            ["10:30 4 b", "10:30 12 c 2", "10:50 4 a", "10:50 12 d 1"]
        );
        assert_eq!(club.table_of(&id("c")), Some(2));
        assert_eq!(club.table_of(&id("d")), Some(1));
        assert_eq!(club.waiting().count(), 0);
        assert_seating_consistent(&club);
    }

    #[test]
    fn moving_client_hands_vacated_table_to_queue_head() {
        let mut club = club(2);
        run(
            &mut club,
            &[
                arrive("10:00", "a"),
                arrive("10:00", "b"),
                arrive("10:00", "c"),
                sit("10:00", "a", 1),
                sit("10:00", "b", 2),
                wait("10:01", "c"),
                // Freed at closing time, so table 2 stays empty.
                leave("19:00", "b"),
                sit("12:00", "a", 2),
            ],
        );

        let output = club.output();
        assert_eq!(
            &output[output.len() - 3..],
            ["19:00 4 b", "12:00 2 a 2", "12:00 12 c 1"]
        );
        assert_seating_consistent(&club);

        club.end_of_day();
        assert_eq!(report_lines(&club), ["1 90 09:00", "2 160 16:00"]);
    }

    #[test]
    fn wait_with_free_table_is_rejected() {
        let mut club = club(3);
        run(&mut club, &[arrive("10:00", "client1"), wait("10:10", "client1")]);

        assert_eq!(
            club.output(),
            [
                "10:00 1 client1",
                "10:10 3 client1",
                "10:10 13 ICanWaitNoLonger!"
            ]
        );
        assert_eq!(club.waiting().count(), 0);
    }

    #[test]
    fn queue_overflow_sends_newest_client_away() {
        let mut club = club(2);
        run(
            &mut club,
            &[
                arrive("10:00", "client1"),
                sit("10:01", "client1", 1),
                arrive("10:00", "client2"),
                sit("10:01", "client2", 2),
                arrive("10:02", "client3"),
                arrive("10:02", "client4"),
                arrive("10:02", "client5"),
                wait("10:05", "client3"),
                wait("10:07", "client4"),
                wait("10:09", "client5"),
            ],
        );

        let output = club.output();
        assert_eq!(
            &output[output.len() - 4..],
            [
                "10:05 3 client3",
                "10:07 3 client4",
                "10:09 3 client5",
                "10:09 11 client5"
            ]
        );
        let waiting: Vec<&str> = club.waiting().map(ClientId::as_str).collect();
        assert_eq!(waiting, ["client3", "client4"]);
        assert!(!club.is_inside(&id("client5")));
        assert_seating_consistent(&club);
    }

    #[test]
    fn waiting_twice_does_not_requeue() {
        let mut club = club(1);
        run(
            &mut club,
            &[
                arrive("10:00", "a"),
                sit("10:00", "a", 1),
                arrive("10:01", "b"),
                wait("10:02", "b"),
                wait("10:03", "b"),
            ],
        );

        assert_eq!(club.output().last().unwrap(), "10:03 3 b");
        assert_eq!(club.waiting().count(), 1);
        assert!(club.is_inside(&id("b")));
    }

    #[test]
    fn seated_client_waiting_keeps_table() {
        let mut club = club(1);
        run(&mut club, &[arrive("10:00", "a"), sit("10:00", "a", 1), wait("10:05", "a")]);

        assert_eq!(club.output().last().unwrap(), "10:05 3 a");
        assert_eq!(club.table_of(&id("a")), Some(1));
        assert_eq!(club.waiting().count(), 0);
    }

    #[test]
    fn leaving_hands_table_to_queue_head() {
        let mut club = club(2);
        run(
            &mut club,
            &[
                arrive("10:00", "client1"),
                sit("10:01", "client1", 1),
                arrive("10:00", "client2"),
                sit("10:01", "client2", 2),
                arrive("10:05", "client3"),
                wait("10:06", "client3"),
                leave("10:10", "client1"),
            ],
        );

        let output = club.output();
        assert_eq!(
            &output[output.len() - 2..],
            ["10:10 4 client1", "10:10 12 client3 1"]
        );
        assert_eq!(club.table_of(&id("client3")), Some(1));
        assert!(!club.is_inside(&id("client1")));
        assert_seating_consistent(&club);

        club.end_of_day();
        let output = club.output();
        assert_eq!(
            &output[output.len() - 2..],
            ["19:00 11 client2", "19:00 11 client3"]
        );
    }

    #[test]
    fn leaving_from_queue_does_not_bill() {
        let mut club = club(1);
        run(
            &mut club,
            &[
                arrive("10:00", "a"),
                sit("10:00", "a", 1),
                arrive("10:10", "b"),
                wait("10:11", "b"),
                leave("10:20", "b"),
                leave("11:00", "a"),
            ],
        );

        assert_eq!(club.output().last().unwrap(), "11:00 4 a");
        assert_eq!(club.waiting().count(), 0);
        assert!(!club.is_inside(&id("b")));
        assert_eq!(report_lines(&club), ["1 10 01:00"]);
    }

    #[test]
    fn sitting_from_queue_leaves_queue() {
        let mut club = club(2);
        run(
            &mut club,
            &[
                arrive("10:00", "a"),
                arrive("10:00", "b"),
                arrive("10:00", "c"),
                sit("10:00", "a", 1),
                sit("10:00", "b", 2),
                wait("10:01", "c"),
            ],
        );
        // Table 2 is freed at closing time, so nobody is auto-seated.
        run(&mut club, &[leave("19:00", "b"), sit("19:00", "c", 2)]);

        assert_eq!(club.table_of(&id("c")), Some(2));
        assert_eq!(club.waiting().count(), 0);
        assert_seating_consistent(&club);
    }

    #[test]
    fn freeing_at_closing_time_does_not_auto_seat() {
        let mut club = club(1);
        run(
            &mut club,
            &[
                arrive("10:00", "a"),
                sit("10:00", "a", 1),
                arrive("10:10", "b"),
                wait("10:11", "b"),
                leave("19:00", "a"),
            ],
        );

        assert_eq!(club.output().last().unwrap(), "19:00 4 a");
        assert_eq!(club.table_of(&id("b")), None);
        assert_eq!(club.waiting().count(), 1);
    }

    #[test]
    fn leaving_after_closing_time_still_auto_seats() {
        let mut club = club(1);
        run(
            &mut club,
            &[
                arrive("10:00", "a"),
                sit("10:00", "a", 1),
                arrive("10:01", "b"),
                wait("10:02", "b"),
                leave("19:30", "a"),
            ],
        );

        assert_eq!(club.output().last().unwrap(), "19:30 12 b 1");
        assert_eq!(club.table_of(&id("b")), Some(1));
        assert_seating_consistent(&club);

        // The closing sweep ends b's stay before it started: nothing billed.
        club.end_of_day();
        assert_eq!(club.output().last().unwrap(), "19:00 11 b");
        assert_eq!(report_lines(&club), ["1 100 09:30"]);
    }

    #[test]
    fn billing_at_maximum_hourly_cost() {
        let cost = ClubConfig::MAX_HOURLY_COST;
        let mut club = Club::new(ClubConfig::new(1, hm("09:00"), hm("19:00"), cost).unwrap());
        run(
            &mut club,
            &[
                arrive("10:00", "a"),
                sit("10:00", "a", 1),
                leave("12:30", "a"),
            ],
        );

        let report = club.report();
        assert_eq!(report[0].revenue, 3 * cost);
        assert_eq!(report[0].occupied_minutes, 150);
    }

    #[test]
    fn end_of_day_frees_tables_and_sends_everyone_home() {
        let mut club = club(3);
        run(
            &mut club,
            &[
                arrive("09:30", "client1"),
                sit("09:35", "client1", 1),
                arrive("09:40", "client2"),
                sit("09:45", "client2", 2),
                arrive("09:50", "client3"),
                wait("09:55", "client3"),
            ],
        );
        club.end_of_day();

        let output = club.output();
        assert!(!output.iter().any(|line| line.contains(" 12 ")));
        let departures: Vec<_> = output
            .iter()
            .filter(|line| line.starts_with("19:00 11 "))
            .collect();
        assert_eq!(
            departures,
            ["19:00 11 client1", "19:00 11 client2", "19:00 11 client3"]
        );
        assert_eq!(report_lines(&club), ["1 100 09:25", "2 100 09:15", "3 0 00:00"]);
        assert!(club.clients.is_empty());
        assert!(club.queue.is_empty());
    }

    #[test]
    fn end_of_day_orders_departures_by_identifier() {
        let mut club = club(1);
        run(
            &mut club,
            &[
                arrive("09:00", "zoe"),
                sit("09:00", "zoe", 1),
                arrive("09:01", "mia"),
                arrive("09:02", "adam"),
                wait("09:03", "mia"),
            ],
        );
        club.end_of_day();

        let output = club.output();
        assert_eq!(
            &output[output.len() - 3..],
            ["19:00 11 adam", "19:00 11 mia", "19:00 11 zoe"]
        );
    }

    #[test]
    fn rejected_events_leave_state_untouched() {
        let mut club = club(1);
        run(&mut club, &[arrive("10:00", "a"), sit("10:00", "a", 1)]);
        let before = club.report();

        run(
            &mut club,
            &[
                arrive("10:05", "a"),
                sit("10:06", "a", 1),
                sit("10:07", "a", 2),
                arrive("10:08", "b"),
                sit("10:09", "b", 1),
            ],
        );

        assert_eq!(club.report(), before);
        assert_eq!(club.table_of(&id("a")), Some(1));
        assert_eq!(club.table_of(&id("b")), None);
        assert_seating_consistent(&club);
    }

    #[test]
    fn report_is_idempotent() {
        let mut club = club(2);
        run(&mut club, &[arrive("09:10", "a"), sit("09:10", "a", 2)]);
        club.end_of_day();

        assert_eq!(club.report(), club.report());
        assert_eq!(report_lines(&club), ["1 0 00:00", "2 100 09:50"]);
    }

    #[test]
    fn full_day_log() {
        let mut club = club(3);
        run(
            &mut club,
            &[
                arrive("08:48", "client1"),
                arrive("09:41", "client1"),
                arrive("09:48", "client2"),
                wait("09:52", "client1"),
                sit("09:54", "client1", 1),
                sit("10:25", "client2", 2),
                arrive("10:58", "client3"),
                sit("10:59", "client3", 3),
                arrive("11:30", "client4"),
                sit("11:35", "client4", 2),
                wait("11:45", "client4"),
                leave("12:33", "client1"),
                leave("12:43", "client2"),
                leave("15:52", "client4"),
            ],
        );
        assert_seating_consistent(&club);
        club.end_of_day();

        let mut output = club.output();
        output.extend(report_lines(&club));
        assert_snapshot!(output.join("\n"), @r"
        08:48 1 client1
        08:48 13 NotOpenYet
        09:41 1 client1
        09:48 1 client2
        09:52 3 client1
        09:52 13 ICanWaitNoLonger!
        09:54 2 client1 1
        10:25 2 client2 2
        10:58 1 client3
        10:59 2 client3 3
        11:30 1 client4
        11:35 2 client4 2
        11:35 13 PlaceIsBusy
        11:45 3 client4
        12:33 4 client1
        12:33 12 client4 1
        12:43 4 client2
        15:52 4 client4
        19:00 11 client3
        1 70 05:58
        2 30 02:18
        3 90 08:01
        ");
    }
}

use crate::config::{ClubConfig, TableIndex};
use crate::discrete_system::component::{Component, HandleInfo, SettleInfo};
use crate::discrete_system::effector::Effector;
use crate::discrete_system::{self, DiscreteSystem, Time};
use crate::report::{DayReport, TableSummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::mem;
use tracing::debug;

pub mod event;
pub mod table;
pub mod waiting;

pub use self::event::{Action, Event, Reason};
use self::table::Table;
use self::waiting::WaitQueue;

/// 1. Club on every action
///     * Outside of opening hours (`open_time..=close_time`) reject with `NotOpenYet`
///     * `Arrive`
///         * If the client is already inside reject with `YouShallNotPass`
///         * Else register the client without a table
///     * `Sit(table)`
///         * If `table` is occupied (by anybody) reject with `PlaceIsBusy`
///         * If the client is not inside reject with `ClientUnknown`
///         * Else
///             1) settle the client's previous table and free it
///             2) occupy `table` from now on
///     * `Wait`
///         * If the client is not inside reject with `ClientUnknown`
///         * If any table is free reject with `ICanWaitNoLonger`
///         * If the client is already queued or seated do nothing
///         * If the queue is full emit `Kicked`, the client stays inside without a table
///         * Else enqueue the client
///     * `Leave`
///         * If the client is not inside reject with `ClientUnknown`
///         * Else
///             1) settle the client's table
///             2) unregister the client (and drop them from the queue)
///             3) seat the head of the queue at the freed table and emit `Seated`
///
/// 2. Club on settlement
///     * For every client still inside, by ascending name
///         1) settle their table at `close_time`
///         2) emit `Kicked` at `close_time`

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Seat {
    NoTable,
    At(TableIndex),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Club {
    pub config: ClubConfig,
    tables: Vec<Table>,
    clients: BTreeMap<String, Seat>,
    queue: WaitQueue,
    empty_tables: usize,
}

impl Club {
    pub fn new(config: ClubConfig) -> Club {
        let table_count = config.table_count as usize;

        Club {
            config,
            tables: vec![Table::new(); table_count],
            clients: BTreeMap::new(),
            queue: WaitQueue::new(table_count),
            empty_tables: table_count,
        }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn queue(&self) -> &WaitQueue {
        &self.queue
    }

    pub fn empty_tables(&self) -> usize {
        self.empty_tables
    }

    pub fn seat_of(&self, client: &str) -> Option<Seat> {
        self.clients.get(client).cloned()
    }

    pub fn clients(&self) -> impl Iterator<Item = (&str, Seat)> {
        self.clients
            .iter()
            .map(|(client, seat)| (client.as_str(), *seat))
    }

    pub fn summary(&self) -> Vec<TableSummary> {
        self.tables
            .iter()
            .enumerate()
            .map(|(index, table)| TableSummary {
                number: index + 1,
                revenue: table.revenue,
                occupied_minutes: table.occupied_minutes,
            })
            .collect()
    }

    fn check_open(&self, time: Time) -> Result<(), Reason> {
        if self.config.is_open_at(time) {
            Ok(())
        } else {
            Err(Reason::NotOpenYet)
        }
    }

    fn arrive(&mut self, client: String, time: Time) -> Result<(), Reason> {
        self.check_open(time)?;

        if self.clients.contains_key(&client) {
            return Err(Reason::YouShallNotPass);
        }

        self.clients.insert(client, Seat::NoTable);

        Ok(())
    }

    fn sit(&mut self, client: String, table: TableIndex, time: Time) -> Result<(), Reason> {
        self.check_open(time)?;

        if !self.tables[table].is_free() {
            return Err(Reason::PlaceIsBusy);
        }

        let seat = *self.clients.get(&client).ok_or(Reason::ClientUnknown)?;

        if let Seat::At(previous) = seat {
            self.tables[previous].vacate(time, &self.config);
            self.empty_tables += 1;
        }

        debug_assert!(!self.queue.contains(&client), "nobody queues while a table is free");

        self.tables[table].occupy(client.clone(), time);
        self.empty_tables -= 1;
        self.clients.insert(client, Seat::At(table));

        Ok(())
    }

    fn wait(&mut self, client: String, time: Time, effector: &mut Effector<Event>) -> Result<(), Reason> {
        self.check_open(time)?;

        let seat = *self.clients.get(&client).ok_or(Reason::ClientUnknown)?;

        if self.empty_tables > 0 {
            return Err(Reason::ICanWaitNoLonger);
        }

        if seat != Seat::NoTable || self.queue.contains(&client) {
            debug!(%client, time, "already seated or queued, ignoring wait");
            return Ok(());
        }

        if let Err(client) = self.queue.push(client) {
            effector.emit_immediately(Event::Kicked { client });
        }

        Ok(())
    }

    fn leave(&mut self, client: String, time: Time, effector: &mut Effector<Event>) -> Result<(), Reason> {
        self.check_open(time)?;

        let seat = self.clients.remove(&client).ok_or(Reason::ClientUnknown)?;

        self.queue.remove(&client);

        if let Seat::At(table) = seat {
            self.tables[table].vacate(time, &self.config);

            match self.queue.pop() {
                Some(next) => {
                    self.tables[table].occupy(next.clone(), time);
                    self.clients.insert(next.clone(), Seat::At(table));
                    effector.emit_immediately(Event::Seated { client: next, table });
                }
                None => self.empty_tables += 1,
            }
        }

        Ok(())
    }
}

impl Component<Action, Event> for Club {
    fn handle(&mut self, info: HandleInfo, action: Action) -> Effector<Event> {
        let mut effector = Effector::new();
        let time = info.current_time;

        let result = match action {
            Action::Arrive { client } => self.arrive(client, time),
            Action::Sit { client, table } => self.sit(client, table, time),
            Action::Wait { client } => self.wait(client, time, &mut effector),
            Action::Leave { client } => self.leave(client, time, &mut effector),
        };

        if let Err(reason) = result {
            debug!(%reason, time, "action rejected");
            effector.emit_immediately(reason.into());
        }

        debug_assert_eq!(
            self.empty_tables,
            self.tables.iter().filter(|table| table.is_free()).count()
        );

        effector
    }

    fn settle(&mut self, info: SettleInfo) -> Effector<Event> {
        let mut effector = Effector::new();

        for (client, seat) in mem::take(&mut self.clients) {
            if let Seat::At(table) = seat {
                self.tables[table].vacate(info.closing_time, &self.config);
                self.empty_tables += 1;
            }

            effector.emit_at(info.closing_time, Event::Kicked { client });
        }

        self.queue.clear();

        effector
    }
}

/// Simulates one business day over time-ordered actions
pub fn run(config: ClubConfig, actions: Vec<discrete_system::Event<Action>>) -> DayReport {
    let closes_at = config.close_time;

    let mut system = DiscreteSystem::new(Club::new(config), closes_at);
    system.run(actions);

    let (club, log) = system.into_parts();

    DayReport::new(&club, log)
}

use crate::discrete_system::component::{Component, HandleInfo, SettleInfo};
use crate::discrete_system::effector::{Effector, ScheduledTime};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::{debug, trace};

pub mod component;
pub mod effector;

/// Minutes since midnight
pub type Time = u32;

pub trait DiscreteSystemMessage: Clone {}
impl<T: Clone> DiscreteSystemMessage for T {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event<M: DiscreteSystemMessage> {
    pub time: Time,
    pub message: M,
}

impl<M: DiscreteSystemMessage> Event<M> {
    pub fn new(time: Time, message: M) -> Event<M> {
        Event { time, message }
    }
}

/// `DiscreteSystem` feeds a time-ordered batch of actions into a single component
/// and keeps the append-only log of everything that happened.
///
/// Every action is echoed into the log before the component reacts to it, so derived
/// messages with the same timestamp always follow the action that caused them.
///
/// The component is settled exactly once: right before the first action which happens
/// after `closes_at`, or when `finish` is called if there is no such action.
pub struct DiscreteSystem<A, M: DiscreteSystemMessage, C: Component<A, M>> {
    pub current_time: Time,
    pub component: C,
    closes_at: Time,
    settled: bool,
    log: Vec<Event<M>>,
    action: PhantomData<A>,
}

impl<A, M, C> DiscreteSystem<A, M, C>
where
    A: DiscreteSystemMessage + Into<M>,
    M: DiscreteSystemMessage,
    C: Component<A, M>,
{
    pub fn new(component: C, closes_at: Time) -> DiscreteSystem<A, M, C> {
        DiscreteSystem {
            current_time: 0,
            component,
            closes_at,
            settled: false,
            log: Vec::new(),
            action: PhantomData,
        }
    }

    fn apply_effector(&mut self, effector: Effector<M>) {
        for event in effector.events.into_iter() {
            let time = match event.time {
                ScheduledTime::Now => self.current_time,
                ScheduledTime::At(time) => time,
            };

            self.log.push(Event {
                time,
                message: event.message,
            });
        }
    }

    pub fn tick(&mut self, event: Event<A>) {
        debug_assert!(event.time >= self.current_time, "actions must be time-ordered");

        if event.time > self.closes_at && !self.settled {
            self.settle();
        }

        self.current_time = event.time;

        trace!(time = event.time, "dispatching action");

        self.log.push(Event {
            time: event.time,
            message: event.message.clone().into(),
        });

        let effector = self.component.handle(
            HandleInfo {
                current_time: self.current_time,
            },
            event.message,
        );

        self.apply_effector(effector);
    }

    /// Runs the closing settlement unless it already happened
    pub fn settle(&mut self) {
        if self.settled {
            return;
        }

        self.settled = true;

        let effector = self.component.settle(SettleInfo {
            closing_time: self.closes_at,
        });

        debug!(
            closing_time = self.closes_at,
            events = effector.events.len(),
            "closing settlement"
        );

        let current_time = self.current_time;
        self.current_time = self.closes_at;
        self.apply_effector(effector);
        self.current_time = current_time.max(self.closes_at);
    }

    pub fn run<I: IntoIterator<Item = Event<A>>>(&mut self, events: I) {
        for event in events {
            self.tick(event);
        }

        self.settle();
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn log(&self) -> &[Event<M>] {
        &self.log
    }

    pub fn into_parts(self) -> (C, Vec<Event<M>>) {
        (self.component, self.log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts actions and reports the count once at settlement
    struct Counter {
        seen: u32,
    }

    impl Component<u32, u32> for Counter {
        fn handle(&mut self, _info: HandleInfo, action: u32) -> Effector<u32> {
            self.seen += 1;

            let mut effector = Effector::new();
            if action == 0 {
                effector.emit_immediately(100);
            }
            effector
        }

        fn settle(&mut self, info: SettleInfo) -> Effector<u32> {
            let mut effector = Effector::new();
            effector.emit_at(info.closing_time, 1000 + self.seen);
            effector
        }
    }

    fn system() -> DiscreteSystem<u32, u32, Counter> {
        DiscreteSystem::new(Counter { seen: 0 }, 10)
    }

    #[test]
    fn derived_messages_follow_their_action() {
        let mut system = system();

        system.tick(Event::new(3, 0));
        system.tick(Event::new(4, 7));

        assert_eq!(
            system.log(),
            &[Event::new(3, 0), Event::new(3, 100), Event::new(4, 7)][..]
        );
    }

    #[test]
    fn settles_at_the_end_when_nothing_is_late() {
        let mut system = system();

        system.run(vec![Event::new(1, 5), Event::new(10, 6)]);

        assert!(system.is_settled());
        assert_eq!(system.log().last(), Some(&Event::new(10, 1002)));
    }

    #[test]
    fn settles_before_the_first_late_action() {
        let mut system = system();

        system.run(vec![Event::new(9, 5), Event::new(11, 6), Event::new(12, 7)]);

        let log: Vec<_> = system.log().iter().map(|event| event.message).collect();
        assert_eq!(log, vec![5, 1001, 6, 7]);
        assert_eq!(system.log()[1].time, 10);
    }

    #[test]
    fn settles_only_once() {
        let mut system = system();

        system.settle();
        system.settle();
        system.run(vec![Event::new(11, 5)]);

        let settlements = system
            .log()
            .iter()
            .filter(|event| event.message >= 1000)
            .count();
        assert_eq!(settlements, 1);
    }
}

use crate::discrete_system::{DiscreteSystemMessage, Time};

#[derive(Debug, PartialEq)]
pub enum ScheduledTime {
    Now,
    At(Time),
}

#[derive(Debug)]
pub struct ScheduledEvent<M> {
    pub message: M,
    pub time: ScheduledTime,
}

/// Everything a component wants to append to the log as a reaction to one action
#[derive(Debug)]
pub struct Effector<M: DiscreteSystemMessage> {
    pub events: Vec<ScheduledEvent<M>>,
}

impl<M: DiscreteSystemMessage> Effector<M> {
    pub fn new() -> Effector<M> {
        Effector { events: Vec::new() }
    }

    pub fn emit_immediately(&mut self, message: M) {
        self.events.push(ScheduledEvent {
            message,
            time: ScheduledTime::Now,
        })
    }

    pub fn emit_at(&mut self, time: Time, message: M) {
        self.events.push(ScheduledEvent {
            message,
            time: ScheduledTime::At(time),
        })
    }
}

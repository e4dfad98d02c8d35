use crate::discrete_system::{DiscreteSystemMessage, Time};
use crate::discrete_system::effector::Effector;

pub struct HandleInfo {
    pub current_time: Time,
}

pub struct SettleInfo {
    pub closing_time: Time,
}

/// `A` is what the component receives from the outside, `M` is what ends up in the log
pub trait Component<A, M: DiscreteSystemMessage>: Sized {
    fn handle(&mut self, info: HandleInfo, action: A) -> Effector<M>;
    fn settle(&mut self, info: SettleInfo) -> Effector<M>;
}

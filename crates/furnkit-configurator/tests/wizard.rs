#[path = "wizard/clamping.rs"]
mod clamping;
#[path = "wizard/cuisine.rs"]
mod cuisine;
#[path = "wizard/navigation.rs"]
mod navigation;
#[path = "wizard/structural.rs"]
mod structural;

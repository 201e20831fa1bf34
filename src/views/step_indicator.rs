/// One entry in the top-of-page step indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub number: u8,
    pub label: &'static str,
    pub active: bool,
    pub completed: bool,
}

const STEPS: [(u8, &str); 2] = [(1, "Authorize"), (2, "Store data")];

pub fn step_indicator(current_step: u8) -> Vec<StepView> {
    STEPS
        .iter()
        .map(|&(number, label)| StepView {
            number,
            label,
            active: current_step == number,
            completed: current_step > number,
        })
        .collect()
}

pub fn step_counter(current_step: u8, total_steps: u8) -> String {
    format!("Step {current_step} of {total_steps}")
}

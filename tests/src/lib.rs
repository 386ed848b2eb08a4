// Cross-crate tests: clinical scenarios, change-triggered recomputation,
// configuration overrides and interactive session flows.

#[cfg(test)]
mod common;
#[cfg(test)]
mod configured;
#[cfg(test)]
mod reactivity;
#[cfg(test)]
mod scenarios;

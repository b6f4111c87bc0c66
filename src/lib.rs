pub mod error;
pub mod select;

pub use error::{Error, Result};
pub use select::{
    kth_smallest, median_ahu, median_quickselect, median_torben, median_wirth, SelectionAlgorithm,
};

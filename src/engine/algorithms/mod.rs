//! The seven step producers
//!
//! Each producer is a plain struct holding its loop indices. The recursive
//! algorithms keep their pending work on an explicit stack:
//! - [`merge`]: ranges to split and merges to perform
//! - [`quick`]: ranges waiting to be partitioned
//! - [`heap`]: the node a suspended sift-down will look at next

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod shaker;

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use shaker::CocktailShakerSort;

pub mod sort_order;

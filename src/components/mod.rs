pub mod dataset_switcher;
pub mod force_graph;
pub mod word_table;

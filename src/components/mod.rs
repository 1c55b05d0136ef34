pub mod coloring;

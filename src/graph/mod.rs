/// Find the [Euclidean Minimum Spanning Tree (EMST)](https://en.wikipedia.org/wiki/Euclidean_minimum_spanning_tree)
pub mod mst;
/// Solve the [Traveling Salesman Problem (TSP)](https://en.wikipedia.org/wiki/Travelling_salesman_problem) exactly
pub mod tsp;

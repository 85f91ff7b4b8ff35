use crate::loader::Dataset;
use std::collections::HashSet;
use std::fmt::Write;

/// Fixed year domain of the participation-overlap graphs.
pub const FIRST_GRAPH_YEAR: i32 = 2010;
pub const LAST_GRAPH_YEAR: i32 = 2024;

/// One node per year in the fixed domain, marked with whether the
/// university fielded a team, plus an undirected weighted edge for every
/// pair of editions sharing at least one player. Chronological layout is a
/// rendering concern handled in [`OverlapGraph::to_dot`]; the graph itself
/// is a plain edge list.
#[derive(Debug, Clone)]
pub struct OverlapGraph {
    pub university: String,
    pub nodes: Vec<YearNode>,
    pub edges: Vec<OverlapEdge>,
}

#[derive(Debug, Clone)]
pub struct YearNode {
    pub year: i32,
    pub participated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapEdge {
    pub first_year: i32,
    pub second_year: i32,
    /// Size of the intersection of the two years' rosters.
    pub shared_players: usize,
}

/// Build the participation-overlap graph for one university over the fixed
/// 2010-2024 domain. A university absent from the whole domain still yields
/// a valid all-empty graph.
pub fn overlap_graph(dataset: &Dataset, university: &str) -> OverlapGraph {
    let participations = dataset.university_participations(university);

    let nodes: Vec<YearNode> = (FIRST_GRAPH_YEAR..=LAST_GRAPH_YEAR)
        .map(|year| YearNode {
            year,
            participated: participations.contains_key(&year),
        })
        .collect();

    let mut edges = Vec::new();
    for first_year in FIRST_GRAPH_YEAR..=LAST_GRAPH_YEAR {
        let Some(first_team) = participations.get(&first_year) else {
            continue;
        };
        let first_roster: HashSet<&str> =
            first_team.players.iter().map(String::as_str).collect();
        for second_year in (first_year + 1)..=LAST_GRAPH_YEAR {
            let Some(second_team) = participations.get(&second_year) else {
                continue;
            };
            let shared = second_team
                .players
                .iter()
                .filter(|p| first_roster.contains(p.as_str()))
                .count();
            if shared != 0 {
                edges.push(OverlapEdge {
                    first_year,
                    second_year,
                    shared_players: shared,
                });
            }
        }
    }

    OverlapGraph {
        university: university.to_string(),
        nodes,
        edges,
    }
}

impl OverlapGraph {
    /// Render as Graphviz DOT: square nodes per year, filled when the
    /// university participated, an invisible chain forcing left-to-right
    /// year order, and one labeled edge per overlapping pair.
    pub fn to_dot(&self, graph_id: &str) -> String {
        let mut dot = String::new();
        let _ = writeln!(dot, "digraph \"{}\" {{", graph_id);
        let _ = writeln!(dot, "    rankdir=LR;");
        let _ = writeln!(dot, "    subgraph \"{}-years\" {{", graph_id);
        let _ = writeln!(dot, "        rank=same;");
        for node in &self.nodes {
            if node.participated {
                let _ = writeln!(
                    dot,
                    "        \"{}\" [shape=square style=filled fillcolor=\"#40e0d0\"];",
                    node.year
                );
            } else {
                let _ = writeln!(dot, "        \"{}\" [shape=square];", node.year);
            }
        }
        for pair in self.nodes.windows(2) {
            let _ = writeln!(
                dot,
                "        \"{}\" -> \"{}\" [style=invis];",
                pair[0].year, pair[1].year
            );
        }
        for edge in &self.edges {
            let _ = writeln!(
                dot,
                "        \"{}\" -> \"{}\" [label=\"{}\" dir=none];",
                edge.first_year, edge.second_year, edge.shared_players
            );
        }
        let _ = writeln!(dot, "    }}");
        let _ = writeln!(dot, "}}");
        dot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tests::sample_dataset;

    #[test]
    fn shared_player_produces_one_weighted_edge() {
        let dataset = sample_dataset();
        let graph = overlap_graph(&dataset, "UH");
        // ana plays in 2014 and 2015; the 2016 roster is fresh.
        assert_eq!(
            graph.edges,
            vec![OverlapEdge {
                first_year: 2014,
                second_year: 2015,
                shared_players: 1
            }]
        );
    }

    #[test]
    fn disjoint_rosters_produce_no_edge() {
        let dataset = sample_dataset();
        let graph = overlap_graph(&dataset, "UH");
        assert!(!graph
            .edges
            .iter()
            .any(|e| e.first_year == 2015 && e.second_year == 2016));
        assert!(!graph
            .edges
            .iter()
            .any(|e| e.first_year == 2014 && e.second_year == 2016));
    }

    #[test]
    fn nodes_cover_fixed_domain_in_order() {
        let dataset = sample_dataset();
        let graph = overlap_graph(&dataset, "UASD");
        assert_eq!(graph.nodes.len(), 15);
        assert_eq!(graph.nodes.first().map(|n| n.year), Some(2010));
        assert_eq!(graph.nodes.last().map(|n| n.year), Some(2024));
        let participated: Vec<i32> = graph
            .nodes
            .iter()
            .filter(|n| n.participated)
            .map(|n| n.year)
            .collect();
        assert_eq!(participated, vec![2014, 2016]);
        // jon returns in 2016.
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].shared_players, 1);
    }

    #[test]
    fn unknown_university_yields_empty_graph() {
        let dataset = sample_dataset();
        let graph = overlap_graph(&dataset, "Nowhere Tech");
        assert!(graph.edges.is_empty());
        assert!(graph.nodes.iter().all(|n| !n.participated));
        // Rendering an empty graph must still work.
        let dot = graph.to_dot("g0");
        assert!(dot.starts_with("digraph"));
    }

    #[test]
    fn dot_marks_participation_and_order() {
        let dataset = sample_dataset();
        let dot = overlap_graph(&dataset, "UH").to_dot("uh");
        assert!(dot.contains("\"2014\" [shape=square style=filled fillcolor=\"#40e0d0\"];"));
        assert!(dot.contains("\"2010\" [shape=square];"));
        assert!(dot.contains("\"2010\" -> \"2011\" [style=invis];"));
        assert!(dot.contains("\"2014\" -> \"2015\" [label=\"1\" dir=none];"));
    }
}

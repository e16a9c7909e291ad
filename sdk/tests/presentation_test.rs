use relgraph_sdk::{ChartOption, RelationGraph, StaticSource};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

fn sample_dataset() -> String {
    fs::read_to_string(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/graph.json"))
        .unwrap()
}

async fn loaded_session() -> RelationGraph {
    let mut session = RelationGraph::new(Box::new(StaticSource::new(sample_dataset())));
    session.fetch().await.unwrap();
    session
}

#[tokio::test]
async fn test_chart_option_shape() {
    let mut session = loaded_session().await;
    session.select_workspace("Sources").unwrap();
    let option = session.chart_option().unwrap();

    let json = serde_json::to_value(&option).unwrap();
    assert_eq!(json["legend"]["data"], json!(["person", "machine", "writing"]));
    assert_eq!(
        json["legend"]["selected"],
        json!({ "person": true, "machine": false, "writing": true })
    );

    let series = &json["series"][0];
    assert_eq!(series["type"], "graph");
    assert_eq!(series["layout"], "force");
    assert_eq!(series["roam"], true);
    assert_eq!(series["label"]["position"], "right");
    assert_eq!(series["tooltip"]["position"], "bottom");
    assert_eq!(series["force"]["repulsion"], 20.0);
    assert_eq!(series["categories"][1], json!({ "name": "machine" }));

    let ada = &series["data"][0];
    assert_eq!(ada["id"], "Ada Lovelace");
    assert_eq!(ada["category"], 0);
    assert_eq!(ada["symbolSize"], 11);
}

#[tokio::test]
async fn test_chart_option_carries_search_styles() {
    let mut session = loaded_session().await;
    session.search("name:babbage").unwrap();
    let option = session.chart_option().unwrap();

    let series = &option.series[0];
    assert_eq!(series.data[1].style.opacity, Some(1.0));
    assert_eq!(series.data[0].style.opacity, Some(0.1));

    // Charles Babbage -> Ada Lovelace
    assert_eq!(series.links[0].source, "Charles Babbage");
    assert_eq!(series.links[0].style.opacity, Some(0.1));
}

#[tokio::test]
async fn test_tooltip_for_node_uses_line_breaks() {
    let session = loaded_session().await;
    let graph = session.graph().unwrap();
    let option = ChartOption::from_graph(graph, session.selection());

    assert_eq!(
        option.series[0].tooltip_for("Ada Lovelace").unwrap(),
        "Ada Lovelace<br> Mathematician.<br>Published the first algorithm intended for a machine."
    );
    assert_eq!(
        option.series[0].tooltip_for("Luigi Menabrea").unwrap(),
        "Luigi Menabrea<br> "
    );
    assert!(option.series[0].tooltip_for("nobody").is_none());
}

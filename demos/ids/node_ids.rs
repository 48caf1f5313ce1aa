use log::{error, info, LevelFilter};
use uaclient::types::{binary::BinaryEncodable, NamespaceTable};
use uaclient::{ExpandedNodeId, NodeId, XmlEncodingId};

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    let inputs = [
        "i=2253",
        "ns=2;s=Line3/Press;Temperature",
        "ns=1;g=72962b91-fa75-4ae6-8d28-b404dc7daf63",
        "ns=4;b=YWJj",
        "i=42;ns=2",
    ];
    for input in inputs {
        match input.parse::<NodeId>() {
            Ok(id) => info!(
                "{input} -> {:?} in ns {}, binary {:02x?}",
                id.identifier(),
                id.namespace_index(),
                id.encode_to_vec()
            ),
            Err(e) => error!("{input} is not a node id: {e}"),
        }
    }

    let mut namespaces = NamespaceTable::new();
    namespaces.push("urn:demo:plant");
    match "svr=0;nsu=urn:demo:plant;s=Boiler".parse::<ExpandedNodeId>() {
        Ok(expanded) => info!(
            "{expanded} resolves to {:?}",
            expanded.to_node_id(&namespaces).map(|id| id.to_string())
        ),
        Err(e) => error!("{e}"),
    }

    match XmlEncodingId::new("i=460") {
        Ok(id) => info!("CreateSessionRequest XML encoding is {}", id.node_id()),
        Err(e) => error!("{e}"),
    }
}

mod common;

use common::{MockTransport, Product, StubParser};
use solr::{Client, ClientError, Connection, Query};

#[test]
fn test_client_returns_parsed_query_results() -> Result<(), ClientError> {
    let transport = MockTransport::new("<response />");
    let connection = Connection::with_transport("http://localhost:8983/solr", transport)?;
    let expected_documents = vec![
        Product { id: 1, name: "iPod".to_owned(), in_stock: true },
        Product { id: 2, name: "Zune".to_owned(), in_stock: false },
    ];
    let parser = StubParser::new(expected_documents.clone(), 5);
    let client = Client::new(connection, parser);

    let results = client.query(&Query::new("*:*"))?;

    assert_eq!(5, results.num_found());
    assert_eq!(2, results.len());
    assert!(!results.is_empty());
    assert_eq!(Some(&expected_documents[0]), results.get(0));

    let actual_names: Vec<&str> = results.iter().map(|product| product.name.as_str()).collect();
    assert_eq!(vec!["iPod", "Zune"], actual_names);

    let actual_documents: Vec<Product> = results.into_iter().collect();
    assert_eq!(expected_documents, actual_documents);

    Ok(())
}

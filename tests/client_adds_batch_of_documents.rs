mod common;

use common::{MockTransport, Product};
use solr::{Client, ClientError, Connection};

#[test]
fn test_client_adds_batch_of_documents() -> Result<(), ClientError> {
    let transport = MockTransport::new("");
    let connection = Connection::with_transport("http://localhost:8983/solr", transport.clone())?;
    let client = Client::new(connection, ());

    client.add_many(&[
        Product { id: 1, name: "iPod".to_owned(), in_stock: true },
        Product { id: 2, name: "iPod & dock".to_owned(), in_stock: false },
    ])?;
    client.commit_with_options(true, true)?;

    let requests = transport.requests();
    assert_eq!(2, requests.len());
    let expected_body = "<add>\
        <doc><field name=\"id\">1</field><field name=\"name\">iPod</field><field name=\"in_stock\">true</field></doc>\
        <doc><field name=\"id\">2</field><field name=\"name\">iPod &amp; dock</field><field name=\"in_stock\">false</field></doc>\
        </add>";
    assert_eq!(Some(expected_body.to_owned()), requests[0].body);
    assert_eq!(
        Some("<commit waitSearcher=\"true\" waitFlush=\"true\" />".to_owned()),
        requests[1].body
    );

    Ok(())
}

use newsrec_observability::init_tracing;

#[test]
fn existing_global_subscriber_is_kept() {
    tracing::subscriber::set_global_default(tracing_subscriber::registry()).unwrap();
    init_tracing();
    init_tracing();
    assert!(tracing::dispatcher::has_been_set());
}

//! Snapshot tests for core types

#[cfg(test)]
mod snapshot_tests {
    use crate::{ChunkMapping, SearchHit};
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_search_hits_snapshot() {
        let hits = vec![SearchHit::new(1, 0.5), SearchHit::new(0, 2.5)];

        assert_yaml_snapshot!(hits, @r###"
        - position: 1
          distance: 0.5
        - position: 0
          distance: 2.5
        "###);
    }

    #[test]
    fn test_chunk_mapping_snapshot() {
        let mapping = ChunkMapping::new(vec!["A B".to_string(), "C D".to_string(), "E".to_string()]);

        assert_yaml_snapshot!(mapping, @r###"
        - A B
        - C D
        - E
        "###);
    }
}

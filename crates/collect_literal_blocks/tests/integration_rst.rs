// crates/collect_literal_blocks/tests/integration_rst.rs

#[cfg(test)]
mod integration_rst {
    use collect_literal_blocks::collect_literal_blocks;
    use doctree::NodeKind;
    use doctree_rst::parse_rst;

    /// Blocks outside the chosen section must never leak into the result.
    #[test]
    fn test_only_blocks_of_the_given_section() {
        let source = "\
Intro
-----

::

    print(0)

Detail
------

::

    print(1)

.. code-block:: python

    print(2)

Other
-----

::

    print(3)
";
        let tree = parse_rst(source).expect("valid document");
        let detail = tree
            .find(|n| n.kind == NodeKind::Section && n.has_id("detail"))
            .expect("detail section present");
        assert_eq!(collect_literal_blocks(detail), vec!["print(1)", "print(2)"]);
    }

    /// Subsections belong to their parent section.
    #[test]
    fn test_subsection_blocks_are_included() {
        let source = "\
Detail
======

Step one::

    make

Step two
--------

::

    make install

Other
=====

::

    make clean
";
        let tree = parse_rst(source).expect("valid document");
        let detail = tree
            .find(|n| n.kind == NodeKind::Section && n.has_id("detail"))
            .expect("detail section present");
        assert_eq!(collect_literal_blocks(detail), vec!["make", "make install"]);
    }
}

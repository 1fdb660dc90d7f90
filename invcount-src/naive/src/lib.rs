inner::doc_inline_reexport! {
    naive_inversion,
}

inner::doc_inline_reexport! {
    randgen,
}

//! Performance benchmarks for product-harvest.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks the full strategy chain on synthetic product pages at the
//! two extremes: a structured-data page that short-circuits early and a
//! selector-less page that walks the whole chain down to the fallback.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use product_harvest::{extract, price};

const STRUCTURED_PAGE: &str = r#"
<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>Chocolate Golazo 25gr | TiendaXYZ</title>
    <script type="application/ld+json">
    {"@type": "Product", "name": "Chocolate Golazo 25gr",
     "brand": {"name": "Golazo"}, "sku": "CG-25",
     "image": "https://cdn.tienda.cl/golazo.jpg",
     "offers": {"@type": "Offer", "price": "890"}}
    </script>
</head>
<body>
    <header><h1>TiendaXYZ.cl</h1></header>
    <main>
        <h1 class="product-title">Chocolate Golazo 25gr</h1>
        <div class="price">$890</div>
        <p>Chocolate de leche en barra individual de veinticinco gramos.</p>
    </main>
</body>
</html>
"#;

const UNSTRUCTURED_PAGE: &str = r#"
<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>TiendaXYZ.cl</title>
</head>
<body>
    <header><nav><a href="/">Inicio</a><a href="/ofertas">Ofertas</a></nav></header>
    <div class="zona-central">
        <h2>Pilas Duracell AA 40 Unidades</h2>
        <span>Llevalo hoy a solo $12.990 con despacho gratis.</span>
        <span>Precio normal $15.990 en tiendas fisicas.</span>
    </div>
    <footer><p>Todos los derechos reservados</p></footer>
</body>
</html>
"#;

fn bench_structured_page(c: &mut Criterion) {
    c.bench_function("extract_structured", |b| {
        b.iter(|| {
            extract(
                black_box(STRUCTURED_PAGE),
                black_box("https://tienda.cl/producto/chocolate-golazo-25gr"),
            )
        });
    });
}

fn bench_unstructured_page(c: &mut Criterion) {
    c.bench_function("extract_unstructured", |b| {
        b.iter(|| {
            extract(
                black_box(UNSTRUCTURED_PAGE),
                black_box("https://tienda.cl/p/pilas-duracell-aa-40-unidades"),
            )
        });
    });
}

fn bench_parse_price(c: &mut Criterion) {
    c.bench_function("parse_price", |b| {
        b.iter(|| {
            price::parse_price(black_box("$1.299.990"));
            price::parse_price(black_box("1.299,50"));
            price::parse_price(black_box("sin precio"));
        });
    });
}

criterion_group!(
    benches,
    bench_structured_page,
    bench_unstructured_page,
    bench_parse_price
);
criterion_main!(benches);

use rand::rngs::StdRng;
use rand::SeedableRng;

use boole::{
    ewise_add, kronecker, multiply_into, reduce, to_text, transitive_closure, BoolMatrixCSR,
};

fn main() -> boole::Result<()> {
    println!("boole {}: sparse boolean linear algebra", boole::VERSION);

    // Two random relations over the same vertex set
    let mut rng = StdRng::seed_from_u64(2023);
    let a = BoolMatrixCSR::random(10, 10, 0.2, &mut rng);
    let b = BoolMatrixCSR::random(10, 10, 0.2, &mut rng);

    println!("\nMatrix A: shape {:?}, {} entries", a.shape(), a.nnz());
    println!("Matrix B: shape {:?}, {} entries", b.shape(), b.nnz());

    // Union, then accumulate the product A x B on top of it
    let mut c = ewise_add(&a, &b)?;
    multiply_into(&a, &b, &mut c)?;
    println!("\n(A + B) + A*B:");
    println!("{:?}", c);

    // Reachability over A
    let t = transitive_closure(&a)?;
    println!(
        "Transitive closure of A: {} entries (from {})",
        t.nnz(),
        a.nnz()
    );

    // The fixed pattern from the exchange-format fixtures
    let rows = [0, 1, 2, 3, 3, 3, 3];
    let cols = [0, 1, 2, 0, 1, 2, 3];
    let matrix = BoolMatrixCSR::from_lists(4, 4, &rows, &cols)?;

    println!("\nFixture matrix:");
    println!("{:?}", matrix);
    println!("Transposed:");
    println!("{:?}", matrix.transpose());
    println!("Rows 0..3, columns 1..:");
    println!("{:?}", matrix.extract(0..3, 1..)?);
    println!("Row reduction: {:?}", reduce(&matrix).to_list());

    // Kronecker blow-up and the text form of the original
    let unit = BoolMatrixCSR::from_lists(1, 1, &[0], &[0])?;
    assert_eq!(kronecker(&unit, &matrix), matrix);

    println!("\nExchange text:\n{}", to_text(&matrix));
    Ok(())
}

use ising::energy::delta_e;
use ising::lattice::Lattice;
use ising::params::Params;

fn zero_field(size: usize) -> Params {
    Params {
        size,
        coupling: 1.0,
        field: 0.0,
        ..Params::default()
    }
}

#[test]
fn test_delta_e_all_up_zero_field() {
    // Flipping any spin of an all-up lattice costs 2 * 1 * (eps * 4) = 8 eps.
    let params = zero_field(4);
    let lat = Lattice::new(4, 1.0);
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(delta_e(&lat, &params, i, j), 8.0);
        }
    }
}

#[test]
fn test_delta_e_antisymmetric_under_reflip() {
    // Flipping the same site twice with nothing else changing must cost
    // exactly opposite energies, at every site of a non-uniform lattice.
    let params = zero_field(5);
    let mut lat = Lattice::new(5, 1.0);
    // Break the symmetry with a few down spins.
    lat.flip(0, 0);
    lat.flip(2, 3);
    lat.flip(4, 1);
    lat.flip(4, 4);

    for i in 0..5 {
        for j in 0..5 {
            let first = delta_e(&lat, &params, i, j);
            lat.flip(i, j);
            let second = delta_e(&lat, &params, i, j);
            lat.flip(i, j);
            assert_eq!(
                second, -first,
                "re-flip at ({i},{j}) not antisymmetric: {first} vs {second}"
            );
        }
    }
}

#[test]
fn test_delta_e_includes_external_field() {
    // On an L=2 torus each neighbor direction wraps to the same site, so the
    // all-up neighbor sum is still 4; the field term adds 2*s*B on top.
    let params = Params {
        size: 2,
        coupling: 1.0,
        field: 0.5,
        ..Params::default()
    };
    let lat = Lattice::new(2, 1.0);
    assert_eq!(delta_e(&lat, &params, 0, 0), 2.0 * (4.0 + 0.5));
}

#[test]
fn test_delta_e_uses_periodic_neighbors() {
    // A corner site's neighbors wrap around the edges: flip the far-edge
    // neighbors of (0,0) and the delta at (0,0) must see them.
    let params = zero_field(4);
    let mut lat = Lattice::new(4, 1.0);
    lat.flip(3, 0); // wraps to be the "above" neighbor of (0,0)
    lat.flip(0, 3); // wraps to be the "left" neighbor of (0,0)

    // Neighbor sum at (0,0) is now 1 + 1 - 1 - 1 = 0.
    assert_eq!(delta_e(&lat, &params, 0, 0), 0.0);
}

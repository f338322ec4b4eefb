use criterion::{black_box, criterion_group, criterion_main, Criterion};

use opencyl_kernel_geom::Cylinder;
use opencyl_kernel_math::{Dir3, Point3, Vec3};
use opencyl_kernel_raytrace::{intersect_cylinder, Ray};

fn ray_cylinder(c: &mut Criterion) {
    let axis = Dir3::new_normalize(Vec3::new(0.0, 0.3, 1.0));
    let cyl = Cylinder::truncated(Point3::origin(), axis, 1.0, -2.0, 2.0);
    let hit = Ray::new(Point3::new(-5.0, 0.1, 0.2), Vec3::new(1.0, 0.0, 0.05));
    let miss = Ray::new(Point3::new(-5.0, 4.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

    c.bench_function("ray_cylinder_hit", |b| {
        b.iter(|| black_box(intersect_cylinder(black_box(&hit), black_box(&cyl))));
    });
    c.bench_function("ray_cylinder_miss", |b| {
        b.iter(|| black_box(intersect_cylinder(black_box(&miss), black_box(&cyl))));
    });
}

criterion_group!(benches, ray_cylinder);
criterion_main!(benches);
